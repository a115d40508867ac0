use serde::Serialize;

pub const FALLBACK_ICON: &str = "fa-circle";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Sector {
    name: &'static str,
    icon: &'static str,
    subsectors: &'static [&'static str],
}

impl Sector {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn subsectors(&self) -> &'static [&'static str] {
        self.subsectors
    }
}

const SECTORS: [Sector; 4] = [
    Sector {
        name: "Energía",
        icon: "fa-bolt",
        subsectors: &[
            "Biocombustibles",
            "Eficiencia Energética",
            "Energías Renovables",
        ],
    },
    Sector {
        name: "Transformación Digital",
        icon: "fa-laptop-code",
        subsectors: &["Gobierno Digital", "Ciberseguridad", "Conectividad"],
    },
    Sector {
        name: "Transporte",
        icon: "fa-truck",
        subsectors: &[],
    },
    Sector {
        name: "Facilitación del Comercio",
        icon: "fa-handshake",
        subsectors: &[],
    },
];

/// The top-level sectors offered as filters, in display order.
pub fn sectors() -> &'static [Sector] {
    &SECTORS
}

pub fn find_sector(name: &str) -> Option<&'static Sector> {
    SECTORS.iter().find(|sector| sector.name == name)
}

pub fn icon_for(name: &str) -> &'static str {
    find_sector(name)
        .map(Sector::icon)
        .unwrap_or(FALLBACK_ICON)
}
