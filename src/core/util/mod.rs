pub mod sample_plane;
