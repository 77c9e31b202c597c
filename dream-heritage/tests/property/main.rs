mod dna_properties;
