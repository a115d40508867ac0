//! A4 PDF rendering of an [ExportDocument]: a filters summary, then one block per member.

use crate::contact::not_blank;
use crate::export::ExportError::CantWritePdf;
use crate::export::{ExportDocument, Result};
use crate::tools::log_message_and_return;
use dto::member::Member;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const FOOTER_HEIGHT: f32 = 10.0;
const INDENT: f32 = 5.0;
/// Average width of a Helvetica glyph, relative to the font size.
const GLYPH_WIDTH_RATIO: f32 = 0.55;
const POINT_IN_MM: f32 = 0.3528;
const TITLE: &str = "Directorio de Redes Sectoriales";
const SUBTITLE: &str = "Proyecto Mesoamérica";
const LAYER: &str = "Directorio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Subtitle,
    Heading,
    Number,
    Name,
    Position,
    Institution,
    Sectors,
    Body,
    Label,
    Detail,
    Spacer,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            LineStyle::Title => 18.0,
            LineStyle::Name | LineStyle::Subtitle => 12.0,
            LineStyle::Heading | LineStyle::Number => 10.0,
            LineStyle::Position | LineStyle::Institution => 9.0,
            _ => 8.0,
        }
    }

    fn height(self) -> f32 {
        match self {
            LineStyle::Title => 10.0,
            LineStyle::Spacer => 4.0,
            LineStyle::Label | LineStyle::Detail => 5.0,
            _ => 6.0,
        }
    }

    fn is_bold(self) -> bool {
        matches!(
            self,
            LineStyle::Title
                | LineStyle::Heading
                | LineStyle::Number
                | LineStyle::Name
                | LineStyle::Sectors
                | LineStyle::Label
        )
    }

    fn color(self) -> (f32, f32, f32) {
        match self {
            LineStyle::Title | LineStyle::Subtitle | LineStyle::Number | LineStyle::Sectors => {
                (0.0, 0.48, 1.0)
            }
            LineStyle::Institution => (0.0, 0.59, 0.78),
            LineStyle::Position | LineStyle::Detail => (0.39, 0.39, 0.39),
            LineStyle::Label => (0.31, 0.31, 0.31),
            _ => (0.0, 0.0, 0.0),
        }
    }

    fn indent(self) -> f32 {
        match self {
            LineStyle::Title | LineStyle::Subtitle | LineStyle::Heading | LineStyle::Number => 0.0,
            _ => INDENT,
        }
    }

    /// Number of characters fitting on a line.
    fn capacity(self) -> usize {
        let glyph_width = self.font_size() * POINT_IN_MM * GLYPH_WIDTH_RATIO;
        ((PAGE_WIDTH - 2.0 * MARGIN - self.indent()) / glyph_width) as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    style: LineStyle,
    text: String,
}

impl Line {
    fn new<S: Into<String>>(style: LineStyle, text: S) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    fn spacer() -> Self {
        Self::new(LineStyle::Spacer, "")
    }

    pub fn style(&self) -> LineStyle {
        self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Lines which must stay on the same page when possible.
pub type Block = Vec<Line>;

/// The document's lines, wrapped and grouped: the header first, then each member.
pub fn layout(document: &ExportDocument) -> Vec<Block> {
    let mut header = vec![
        Line::new(LineStyle::Title, TITLE),
        Line::new(LineStyle::Subtitle, SUBTITLE),
        Line::spacer(),
        Line::new(LineStyle::Heading, "Filtros aplicados:"),
        Line::new(
            LineStyle::Body,
            match document.sector() {
                Some(sector) => format!("* Sector: {sector}"),
                None => "* Todos los sectores".to_owned(),
            },
        ),
    ];
    if let Some(search_term) = document.search_term() {
        header.push(Line::new(
            LineStyle::Body,
            format!("* Búsqueda: \"{search_term}\""),
        ));
    }
    header.push(Line::new(
        LineStyle::Body,
        format!("* Total de miembros: {}", document.total_members()),
    ));
    header.push(Line::new(
        LineStyle::Body,
        format!("* Fecha de generación: {}", document.generated_on()),
    ));
    header.push(Line::spacer());

    let mut blocks = vec![header];
    blocks.extend(
        document
            .members()
            .iter()
            .enumerate()
            .map(|(index, member)| member_block(index + 1, member)),
    );
    blocks
}

fn member_block(number: usize, member: &Member) -> Block {
    let mut lines = vec![Line::new(LineStyle::Number, format!("{number}."))];
    push_wrapped(&mut lines, LineStyle::Name, member.name());
    push_wrapped(&mut lines, LineStyle::Position, member.position());
    push_wrapped(&mut lines, LineStyle::Institution, member.institution());
    lines.push(Line::new(LineStyle::Body, format!("País: {}", member.country())));
    push_wrapped(
        &mut lines,
        LineStyle::Sectors,
        &format!("Sectores: {}", member.sectors().join(", ")),
    );
    lines.push(Line::new(LineStyle::Body, format!("Correo: {}", member.email())));
    if let Some(phone) = not_blank(member.phone()) {
        lines.push(Line::new(LineStyle::Body, format!("Teléfono: {phone}")));
    }
    if let Some(whatsapp) = not_blank(member.whatsapp()) {
        lines.push(Line::new(LineStyle::Body, format!("WhatsApp: {whatsapp}")));
    }
    for (label, text) in [
        ("Áreas de interés:", member.interest_areas()),
        ("Temas de apoyo:", member.support_topics()),
    ] {
        if !text.trim().is_empty() {
            lines.push(Line::new(LineStyle::Label, label));
            push_wrapped(&mut lines, LineStyle::Detail, text);
        }
    }
    lines.push(Line::spacer());
    lines
}

fn push_wrapped(lines: &mut Vec<Line>, style: LineStyle, text: &str) {
    lines.extend(
        wrap(text, style.capacity())
            .into_iter()
            .map(|text| Line::new(style, text)),
    );
}

/// Split a text on spaces so that each line holds at most `capacity` characters.
/// A word longer than a line is cut.
pub fn wrap(text: &str, capacity: usize) -> Vec<String> {
    let capacity = capacity.max(1);
    let mut lines = vec![];
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > capacity {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..capacity).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        let current_length = current.chars().count();
        if current_length > 0 && current_length + 1 + word.chars().count() > capacity {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Distribute blocks over pages. A block goes to the next page when it doesn't fit,
/// unless it doesn't fit on an empty page either.
pub fn paginate(blocks: Vec<Block>) -> Vec<Vec<Line>> {
    let available = PAGE_HEIGHT - 2.0 * MARGIN - FOOTER_HEIGHT;
    let mut pages: Vec<Vec<Line>> = vec![vec![]];
    let mut used = 0.0;
    for block in blocks {
        let height: f32 = block.iter().map(|line| line.style.height()).sum();
        if used > 0.0 && used + height > available && height <= available {
            pages.push(vec![]);
            used = 0.0;
        }
        for line in block {
            if used > 0.0 && used + line.style.height() > available {
                pages.push(vec![]);
                used = 0.0;
            }
            used += line.style.height();
            if let Some(page) = pages.last_mut() {
                page.push(line);
            }
        }
    }
    pages
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render the document as PDF bytes.
pub fn write_document(document: &ExportDocument) -> Result<Vec<u8>> {
    let pages = paginate(layout(document));
    let total_pages = pages.len();
    let (pdf, first_page, first_layer) =
        PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let fonts = load_fonts(&pdf)?;

    for (index, lines) in pages.iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = pdf.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            pdf.get_page(page).get_layer(layer)
        };
        write_page(&layer, &fonts, lines);
        write_footer(&layer, &fonts, index + 1, total_pages);
    }

    pdf.save_to_bytes()
        .map_err(log_message_and_return("Can't write PDF", CantWritePdf))
}

fn load_fonts(pdf: &PdfDocumentReference) -> Result<Fonts> {
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(log_message_and_return("Can't load PDF font", CantWritePdf))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(log_message_and_return("Can't load PDF font", CantWritePdf))?;
    Ok(Fonts { regular, bold })
}

fn write_page(layer: &PdfLayerReference, fonts: &Fonts, lines: &[Line]) {
    let mut y = PAGE_HEIGHT - MARGIN;
    for line in lines {
        y -= line.style.height();
        if line.text.is_empty() {
            continue;
        }
        let (r, g, b) = line.style.color();
        layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        let font = if line.style.is_bold() {
            &fonts.bold
        } else {
            &fonts.regular
        };
        layer.use_text(
            line.text.as_str(),
            line.style.font_size(),
            Mm(MARGIN + line.style.indent()),
            Mm(y),
            font,
        );
    }
}

fn write_footer(layer: &PdfLayerReference, fonts: &Fonts, page: usize, total_pages: usize) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.59, 0.59, 0.59, None)));
    layer.use_text(
        format!("Página {page} de {total_pages} | {SUBTITLE} - {TITLE}"),
        8.0,
        Mm(MARGIN),
        Mm(FOOTER_HEIGHT),
        &fonts.regular,
    );
}
