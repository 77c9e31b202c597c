mod dedup_properties;
