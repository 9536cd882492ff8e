pub mod recon_2d_test;
