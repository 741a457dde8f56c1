mod accessors;
