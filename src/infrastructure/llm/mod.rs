mod azure_openai_client;

pub use azure_openai_client::AzureOpenAiClient;
