//! Vertex descriptions and their attribute rendering

use std::io::Write;

use crate::error::DotError;

/// Everything needed to write one DOT node line.
///
/// String attributes are unset when empty and `peripheries` is unset when
/// zero. Values are written as given; a value containing `"` is not escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexDescription {
    id: String,

    pub label: String,
    pub group: String,
    pub color: String,
    pub style: String,
    pub color_scheme: String,
    pub font_color: String,
    pub font_name: String,
    pub shape: String,

    pub peripheries: i32,
}

/// Attributes in the order they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexAttribute {
    Label,
    Group,
    Color,
    Style,
    ColorScheme,
    FontColor,
    FontName,
    Shape,
    Peripheries,
}

impl VertexAttribute {
    const ALL: [VertexAttribute; 9] = [
        VertexAttribute::Label,
        VertexAttribute::Group,
        VertexAttribute::Color,
        VertexAttribute::Style,
        VertexAttribute::ColorScheme,
        VertexAttribute::FontColor,
        VertexAttribute::FontName,
        VertexAttribute::Shape,
        VertexAttribute::Peripheries,
    ];

    fn name(self) -> &'static str {
        match self {
            VertexAttribute::Label => "label",
            VertexAttribute::Group => "group",
            VertexAttribute::Color => "color",
            VertexAttribute::Style => "style",
            VertexAttribute::ColorScheme => "colorscheme",
            VertexAttribute::FontColor => "fontcolor",
            VertexAttribute::FontName => "fontname",
            VertexAttribute::Shape => "shape",
            VertexAttribute::Peripheries => "peripheries",
        }
    }
}

enum AttributeValue<'a> {
    Text(&'a str),
    Integer(i32),
}

impl AttributeValue<'_> {
    /// `name="value" `, or `None` when the value is unset
    fn render(&self, name: &str) -> Option<String> {
        match *self {
            AttributeValue::Text("") | AttributeValue::Integer(0) => None,
            // HTML-like labels must stay unquoted
            AttributeValue::Text(value) if value.starts_with('<') => {
                Some(format!("{name}={value} "))
            }
            AttributeValue::Text(value) => Some(format!("{name}=\"{value}\" ")),
            AttributeValue::Integer(value) => Some(format!("{name}=\"{value}\" ")),
        }
    }
}

impl VertexDescription {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            label: String::new(),
            group: String::new(),
            color: String::new(),
            style: String::new(),
            color_scheme: String::new(),
            font_color: String::new(),
            font_name: String::new(),
            shape: String::new(),
            peripheries: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = group.to_string();
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    pub fn with_color_scheme(mut self, color_scheme: &str) -> Self {
        self.color_scheme = color_scheme.to_string();
        self
    }

    pub fn with_font_color(mut self, font_color: &str) -> Self {
        self.font_color = font_color.to_string();
        self
    }

    pub fn with_font_name(mut self, font_name: &str) -> Self {
        self.font_name = font_name.to_string();
        self
    }

    pub fn with_shape(mut self, shape: &str) -> Self {
        self.shape = shape.to_string();
        self
    }

    pub fn with_peripheries(mut self, peripheries: i32) -> Self {
        self.peripheries = peripheries;
        self
    }

    fn attribute(&self, attribute: VertexAttribute) -> AttributeValue<'_> {
        match attribute {
            VertexAttribute::Label => AttributeValue::Text(&self.label),
            VertexAttribute::Group => AttributeValue::Text(&self.group),
            VertexAttribute::Color => AttributeValue::Text(&self.color),
            VertexAttribute::Style => AttributeValue::Text(&self.style),
            VertexAttribute::ColorScheme => AttributeValue::Text(&self.color_scheme),
            VertexAttribute::FontColor => AttributeValue::Text(&self.font_color),
            VertexAttribute::FontName => AttributeValue::Text(&self.font_name),
            VertexAttribute::Shape => AttributeValue::Text(&self.shape),
            VertexAttribute::Peripheries => AttributeValue::Integer(self.peripheries),
        }
    }

    /// The node line without a line break, e.g. `a [label="A" shape="box" ]`
    pub fn render(&self) -> String {
        let mut line = format!("{} [", self.id);
        for attribute in VertexAttribute::ALL {
            if let Some(rendered) = self.attribute(attribute).render(attribute.name()) {
                line.push_str(&rendered);
            }
        }
        line.push(']');
        line
    }

    pub fn write(&self, output: &mut dyn Write) -> Result<(), DotError> {
        output.write_all(self.render().as_bytes())?;
        Ok(())
    }
}
