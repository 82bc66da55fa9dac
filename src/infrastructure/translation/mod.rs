mod azure_translator;

pub use azure_translator::AzureTranslator;
