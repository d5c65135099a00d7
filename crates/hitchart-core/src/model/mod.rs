pub mod artist;
pub mod song;

pub use artist::Artist;
pub use song::Song;
