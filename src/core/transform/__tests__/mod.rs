pub mod spectral_test;
