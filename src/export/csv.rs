use crate::export::ExportError::CantWriteCsv;
use crate::export::Result;
use crate::tools::log_message_and_return;
use dto::member::Member;

const DELIMITER: u8 = b';';
const HEADER: [&str; 11] = [
    "Nombre",
    "Cargo",
    "Institución",
    "País",
    "Sectores",
    "Subsectores",
    "Correo",
    "Teléfono",
    "WhatsApp",
    "Áreas de interés",
    "Temas de apoyo",
];

pub fn write_members(members: &[&Member]) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(vec![]);

    writer
        .write_record(HEADER)
        .map_err(log_message_and_return("Can't write CSV header", CantWriteCsv))?;
    for member in members {
        writer
            .write_record(to_record(member))
            .map_err(log_message_and_return("Can't write CSV record", CantWriteCsv))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(log_message_and_return("Can't flush CSV", CantWriteCsv))?;
    String::from_utf8(bytes).map_err(log_message_and_return("CSV is not valid UTF-8", CantWriteCsv))
}

fn to_record(member: &Member) -> [String; 11] {
    [
        member.name().to_owned(),
        member.position().to_owned(),
        member.institution().to_owned(),
        member.country().to_owned(),
        member.sectors().join(", "),
        member.subsectors().join(", "),
        member.email().to_owned(),
        member.phone().clone().unwrap_or_default(),
        member.whatsapp().clone().unwrap_or_default(),
        member.interest_areas().to_owned(),
        member.support_topics().to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_write_header_and_one_line_per_member() {
        let jon = Member::new_test("1", "Jon Doe", "Panamá", &["Energía", "Transporte"]);
        let ana = Member::new_test("2", "Ana", "Belice", &["Energía"]);

        let csv = write_members(&[&jon, &ana]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(3, lines.len());
        assert!(lines[0].starts_with("Nombre;Cargo;Institución;País;Sectores"));
        assert_eq!(
            "Jon Doe;Position;Institution 1;Panamá;Energía, Transporte;;1@directory.org;;;;",
            lines[1]
        );
        assert!(lines[2].starts_with("Ana;"));
    }

    #[test]
    fn should_only_write_header_when_no_member() {
        let csv = write_members(&[]).unwrap();

        assert_eq!(1, csv.lines().count());
    }
}
