// The read-only tables are queried through raw templates; only fixtures write them.
#[cfg(test)]
pub mod artist;
pub mod artist_award;
pub mod award;
#[cfg(test)]
pub mod music;
#[cfg(test)]
pub mod singer;
#[cfg(test)]
pub mod song;
