mod object_blob_store_test;
