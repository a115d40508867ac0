use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A contact of the sectoral networks directory.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    id: String,
    name: String,
    country: String,
    institution: String,
    position: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    whatsapp: Option<String>,
    sectors: Vec<String>,
    #[serde(default)]
    subsectors: Vec<String>,
    #[serde(default)]
    interest_areas: String,
    #[serde(default)]
    support_topics: String,
    #[serde(default)]
    photo_url: String,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        country: String,
        institution: String,
        position: String,
        email: String,
        phone: Option<String>,
        whatsapp: Option<String>,
        sectors: Vec<String>,
        subsectors: Vec<String>,
        interest_areas: String,
        support_topics: String,
        photo_url: String,
    ) -> Self {
        Self {
            id,
            name,
            country,
            institution,
            position,
            email,
            phone,
            whatsapp,
            sectors,
            subsectors,
            interest_areas,
            support_topics,
            photo_url,
        }
    }

    pub fn belongs_to(&self, sector: &str) -> bool {
        self.sectors.iter().any(|member_sector| member_sector == sector)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Member {
        /// A member with only the fields the query pipeline looks at.
        pub fn new_test(id: &str, name: &str, country: &str, sectors: &[&str]) -> Self {
            Member {
                id: id.to_owned(),
                name: name.to_owned(),
                country: country.to_owned(),
                institution: format!("Institution {id}"),
                position: "Position".to_owned(),
                email: format!("{id}@directory.org"),
                phone: None,
                whatsapp: None,
                sectors: sectors.iter().map(|sector| (*sector).to_owned()).collect(),
                subsectors: vec![],
                interest_areas: String::new(),
                support_topics: String::new(),
                photo_url: String::new(),
            }
        }
    }

    pub const MEMBER_AS_JSON: &str = r#"{
        "id": "member-001",
        "name": "María Fernanda López García",
        "country": "México",
        "institution": "Secretaría de Energía",
        "position": "Directora de Cooperación Internacional",
        "email": "mf.lopez@energia.gob.mx",
        "phone": "+52 55 1234-5678",
        "sectors": ["Energía"],
        "photo_url": "https://i.pravatar.cc/300?img=1"
    }"#;

    #[test]
    fn should_deserialize_member_with_optional_fields_missing() {
        let member: Member = serde_json::from_str(MEMBER_AS_JSON).unwrap();

        assert_eq!("member-001", member.id());
        assert_eq!(&Some("+52 55 1234-5678".to_owned()), member.phone());
        assert_eq!(&None, member.whatsapp());
        assert!(member.subsectors().is_empty());
        assert_eq!("", member.interest_areas());
    }

    #[test]
    fn should_belong_to_any_of_its_sectors() {
        let member = Member::new_test("1", "Jon", "Panamá", &["Transporte", "Energía"]);

        assert!(member.belongs_to("Energía"));
        assert!(member.belongs_to("Transporte"));
        assert!(!member.belongs_to("Energia"));
    }
}
