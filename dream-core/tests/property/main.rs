mod confidence_properties;
