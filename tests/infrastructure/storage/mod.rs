mod cos_store_test;
