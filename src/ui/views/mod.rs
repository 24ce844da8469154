pub mod cluster_songs;
pub mod lyric_detail;
pub mod recommender;
pub mod song_list;

pub use cluster_songs::ClusterSongs;
pub use lyric_detail::LyricDetail;
pub use recommender::Recommender;
pub use song_list::SongList;
