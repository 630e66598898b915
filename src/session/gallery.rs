//! Photo/caption pairing.
//!
//! Photo `i` takes caption `i`. Photos past the caption list go without one,
//! captions past the photo list are dropped, and at most `max` photos are
//! shown; the rest are only counted.

use crate::assets::Photo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry<'a> {
    pub photo: &'a Photo,
    pub caption: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery<'a> {
    pub entries: Vec<GalleryEntry<'a>>,
    pub hidden: usize,
}

pub fn pair_captions<'a>(photos: &'a [Photo], captions: &'a [String], max: usize) -> Gallery<'a> {
    let entries = photos
        .iter()
        .take(max)
        .enumerate()
        .map(|(i, photo)| GalleryEntry {
            photo,
            caption: captions.get(i).map(String::as_str),
        })
        .collect();
    Gallery {
        entries,
        hidden: photos.len().saturating_sub(max),
    }
}
