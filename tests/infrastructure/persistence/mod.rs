mod in_memory_counter_store_test;
