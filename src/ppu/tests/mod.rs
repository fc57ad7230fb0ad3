mod register_file_tests;
