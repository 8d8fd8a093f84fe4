use std::{fs::File, io::BufReader, path::Path};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// One catalog course. The description is filled in externally (see
/// [`crate::bulletin`]), not derived from the other fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub prefix: String,
    pub suffix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    #[must_use]
    pub fn code(&self) -> String {
        format!("{} {}", self.prefix, self.suffix)
    }
}

/// Walking distances between campus buildings, keyed by building name in
/// either direction. The data is assumed symmetric and non-negative; this
/// is not checked.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distances(HashMap<String, HashMap<String, f64>>);

impl Distances {
    #[must_use]
    pub fn between(&self, from: &str, to: &str) -> Option<f64> {
        self.0
            .get(from)
            .and_then(|row| row.get(to))
            .or_else(|| self.0.get(to).and_then(|row| row.get(from)))
            .copied()
    }
}

/// Snapshot of the scheduling input data: courses in catalog order plus the
/// distance matrix. Built once, handed to the scheduler, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SampleData {
    courses: Vec<Course>,
    distances: Distances,
}

impl SampleData {
    #[must_use]
    pub const fn new(courses: Vec<Course>, distances: Distances) -> Self {
        Self { courses, distances }
    }

    /// Read a sample-data dump from its two JSON files.
    pub fn load(courses: &Path, distances: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(read_json(courses)?, read_json(distances)?))
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub const fn distances(&self) -> &Distances {
        &self.distances
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(prefix: &str, suffix: &str) -> Course {
        Course {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
            description: None,
        }
    }

    #[test]
    fn preserves_course_order_and_distances() {
        let distances: Distances = serde_json::from_str(
            r#"{ "Boyd": { "Aderhold": 12.5, "Driftmier": 3.0 } }"#,
        )
        .unwrap();

        let data = SampleData::new(
            vec![course("CSCI", "1302"), course("MATH", "2250"), course("PHYS", "1211")],
            distances,
        );

        let codes = data.courses().iter().map(Course::code).collect::<Vec<_>>();
        assert_eq!(codes, ["CSCI 1302", "MATH 2250", "PHYS 1211"]);

        assert_eq!(data.distances().between("Boyd", "Aderhold"), Some(12.5));
        assert_eq!(data.distances().between("Boyd", "Snelling"), None);
    }

    #[test]
    fn distance_lookup_works_in_both_directions() {
        let distances: Distances =
            serde_json::from_str(r#"{ "Boyd": { "Aderhold": 12.5 } }"#).unwrap();

        assert_eq!(distances.between("Aderhold", "Boyd"), Some(12.5));
    }

    #[test]
    fn course_dump_may_omit_descriptions() {
        let courses: Vec<Course> = serde_json::from_str(
            r#"[
                { "prefix": "CSCI", "suffix": "1302" },
                { "prefix": "CSCI", "suffix": "1730", "description": "Systems programming." }
            ]"#,
        )
        .unwrap();

        assert_eq!(courses[0].description, None);
        assert_eq!(courses[1].description.as_deref(), Some("Systems programming."));
    }
}
