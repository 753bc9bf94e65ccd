use serde::{Deserialize, Deserializer, Serialize};

pub type ArtistId = i64;

/// Missing and `null` fields both decode to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ArtistId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_date: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_album: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub concert_dates: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relations: String,
}

impl Artist {
    /// Overwrites every field but `id` with the ones of `other`.
    pub fn replace_fields(&mut self, other: Artist) {
        let id = self.id;
        *self = Artist { id, ..other };
    }

    pub fn name_contains(&self, lowercase_needle: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_needle)
    }
}
