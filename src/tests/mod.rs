mod region_code;
