//! Test data for the scenario suite.

use petprobe_domain::petstore::{Category, Pet, PetStatus, Tag};
use rand::Rng;

const PHOTO_URLS: [&str; 2] = [
    "https://i.guim.co.uk/img/media/8c5d882b8501dda8499819d8cc98f6e13fb6c433/0_0_3264_2119/master/3264.jpg?width=620&quality=45&auto=format&fit=max&dpr=2&s=073b4106cc1671d82af95b3c394864b9",
    "https://s.yimg.com/ny/api/res/1.2/GDZTSHJFOA_8Ww4XpTwR8Q--/YXBwaWQ9aGlnaGxhbmRlcjt3PTk2MDtoPTU2MA--/https://67.media.tumblr.com/6669c3a60b21717582c6d9f18bf3f6aa/tumblr_inline_obop4fohhx1ttbdeg_1280.jpg",
];

/// A 1x1 transparent PNG, uploaded when no image file is configured.
pub const SAMPLE_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Random non-negative id that the API accepts (below `i32::MAX`).
fn valid_id(rng: &mut impl Rng) -> i64 {
    i64::from(rng.random_range(0..i32::MAX))
}

/// A complete, valid pet with random ids.
#[must_use]
pub fn valid_pet() -> Pet {
    valid_pet_with(&mut rand::rng())
}

/// Same as [`valid_pet`] drawing ids from `rng`.
pub fn valid_pet_with(rng: &mut impl Rng) -> Pet {
    Pet::new(valid_id(rng))
        .with_name("Dundee")
        .with_category(Category::new(valid_id(rng), "Crocodile"))
        .with_photo_urls(PHOTO_URLS)
        .with_tags(vec![Tag::new(valid_id(rng), "Reptiles")])
        .with_status(PetStatus::Available)
}

/// A pet whose every id is `invalid_id`. Category and tag carry no name.
#[must_use]
pub fn pet_with_invalid_id(invalid_id: i64) -> Pet {
    let mut pet = Pet::new(invalid_id)
        .with_name("Rex")
        .with_status(PetStatus::Available);
    pet.category = Some(Category {
        id: invalid_id,
        name: None,
    });
    pet.tags = vec![Tag {
        id: invalid_id,
        name: None,
    }];
    pet
}

/// Two ids the API rejects on create: one above `i32::MAX`, one negative.
pub fn out_of_range_ids(rng: &mut impl Rng) -> [i64; 2] {
    [
        rng.random_range(i64::from(i32::MAX) + 1..i64::MAX),
        rng.random_range(i64::MIN..0),
    ]
}

/// Status strings the API does not recognise. Only lowercase values are valid.
#[must_use]
pub fn invalid_statuses() -> [String; 3] {
    [
        PetStatus::Sold.as_str().to_uppercase(),
        capitalize(PetStatus::Pending.as_str()),
        "invalid".to_string(),
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_valid_pet_ids_fit_in_i32() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let pet = valid_pet_with(&mut rng);
            assert!((0..i64::from(i32::MAX)).contains(&pet.id));
            assert_eq!(pet.name.as_deref(), Some("Dundee"));
            assert_eq!(pet.status, Some(PetStatus::Available));
            assert_eq!(pet.photo_urls.len(), 2);
        }
    }

    #[test]
    fn test_out_of_range_ids_are_out_of_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let [high, low] = out_of_range_ids(&mut rng);
            assert!(high > i64::from(i32::MAX));
            assert!(low < 0);
        }
    }

    #[test]
    fn test_invalid_pet_reuses_id() {
        let pet = pet_with_invalid_id(-5);
        assert_eq!(pet.id, -5);
        assert_eq!(pet.category.map(|c| (c.id, c.name)), Some((-5, None)));
        assert!(pet.photo_urls.is_empty());
        assert_eq!(pet.tags.len(), 1);
    }

    #[test]
    fn test_invalid_status_spellings() {
        assert_eq!(invalid_statuses(), ["SOLD", "Pending", "invalid"]);
    }

    #[test]
    fn test_sample_png_has_signature() {
        assert!(SAMPLE_PNG.starts_with(b"\x89PNG\r\n\x1a\n"));
    }
}
