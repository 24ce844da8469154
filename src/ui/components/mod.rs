pub mod cluster_gallery;
pub mod pagination;
pub mod search_bar;
pub mod song_table;
pub mod spinner;
pub mod status_bar;
