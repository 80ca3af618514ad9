#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl From<Rgb> for Rgba {
    fn from(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
    }
}

/// Top artists
pub const SEED_COLOR: Rgb = Rgb::new(0, 0, 205);
/// Artists only discovered through similarity
pub const SIMILAR_COLOR: Rgb = Rgb::new(238, 0, 0);

/// Rendering attributes handed to graph exporters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeViz {
    pub size: u32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    value: u32,
    color: Rgb,
}

impl Node {
    pub fn seed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 1,
            color: SEED_COLOR,
        }
    }

    pub fn similar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 1,
            color: SIMILAR_COLOR,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of times the artist was referenced.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn is_seed(&self) -> bool {
        self.color == SEED_COLOR
    }

    /// Another reference as a top artist: always recolors to the seed color.
    pub fn upsert_as_seed(&mut self) {
        self.value += 1;
        self.color = SEED_COLOR;
    }

    /// Another reference as a similar artist: the color is kept.
    pub fn upsert_as_similar(&mut self) {
        self.value += 1;
    }

    pub fn viz(&self) -> NodeViz {
        NodeViz {
            size: self.value,
            color: self.color.into(),
        }
    }
}
