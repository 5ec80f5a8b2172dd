use std::{
    collections::HashMap,
    io::{self, Read, Seek},
};

use log::{debug, warn};
use thiserror::Error;

use crate::{
    camera::{Camera, Viewport},
    lighting::{Ambient, Directional, Light, Point},
    material::{Color, Material},
    object::Sphere,
    scene::Scene,
};

use super::{
    ast::{self, AstError, AstParser},
    tokenize::{TokenizeError, Tokenizer},
};

/// The canvas size used when a source has no `canvas` object.
pub const DEFAULT_CANVAS_SIZE: (u32, u32) = (640, 640);

/// The largest canvas side accepted, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16384;

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("unable to read scene source: {0}")]
    Io(#[from] io::Error),

    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizeError),

    #[error("ast error: {0}")]
    Ast(#[from] AstError),

    #[error("there are too many definitions of the {0} object, expecting zero or one")]
    NonUniqueObject(&'static str),

    #[error("unknown scene object/scene definition {0}")]
    UnknownObject(String),

    #[error("property {0} must be specified (it is not optional)")]
    RequiredPropertyMissing(&'static str),

    #[error("property {0} was expected to be {1}, is actually {2}")]
    PropertyTypeMismatch(&'static str, &'static str, String),

    #[error("property {0} is out of range: {1}")]
    OutOfRange(&'static str, String),
}

/// Everything a scene source describes: what to draw, where to look from, and how big the image is.
pub struct Description {
    pub scene: Scene,
    pub camera: Camera,
    pub width: u32,
    pub height: u32,
}

type Properties = HashMap<String, ast::Node>;

/// Check a canvas side: a whole number of pixels between 1 and `MAX_CANVAS_SIDE`.
pub fn pixel_count(name: &'static str, value: f64) -> Result<u32, InterpretError> {
    if !(1. ..=MAX_CANVAS_SIDE as f64).contains(&value) || value.fract() != 0. {
        return Err(InterpretError::OutOfRange(name, value.to_string()));
    }
    Ok(value as u32)
}

macro_rules! required_property {
    ($properties:ident, $name:literal, $variant:path) => {
        match $properties.get($name) {
            Some($variant(value)) => value.clone(),
            Some(n) => {
                return Err(InterpretError::PropertyTypeMismatch(
                    $name,
                    stringify!($variant),
                    format!("{:?}", n),
                ))
            }
            None => return Err(InterpretError::RequiredPropertyMissing($name)),
        }
    };
}

macro_rules! optional_property {
    ($properties:ident, $name:literal, $variant:path) => {
        match $properties.get($name) {
            Some($variant(value)) => Some(value.clone()),
            Some(n) => {
                return Err(InterpretError::PropertyTypeMismatch(
                    $name,
                    stringify!($variant),
                    format!("{:?}", n),
                ))
            }
            None => None,
        }
    };
}

/// The interpreter turns the parsed source into a scene, a camera and a canvas size.
pub struct Interpreter {
    root: ast::Node,
}

impl Interpreter {
    /// Create a new interpreter. This will instantiate a `Tokenizer` and tokenize the input, as well
    /// as instantiate an `AstParser` and parse the tokenized input.
    pub fn new<R: Read + Seek>(reader: R) -> Result<Self, InterpretError> {
        Ok(Interpreter {
            root: AstParser::new(Tokenizer::new(reader).tokenize()?).parse_root()?,
        })
    }

    /// Start execution of the interpreter.
    pub fn run(self) -> Result<Description, InterpretError> {
        let nodes = match self.root {
            ast::Node::Root(nodes) => nodes,
            _ => unreachable!(),
        };

        let mut scene = Scene::default();
        let mut camera = None;
        let mut canvas = None;
        let mut background = None;

        for node in nodes.into_iter() {
            let (name, properties) = match node {
                ast::Node::Object { name, properties } => (name, properties),
                _ => continue,
            };

            match name.as_str() {
                "canvas" => {
                    Self::check_properties(&name, &properties, &["width", "height"]);
                    Self::unique(&mut canvas, "canvas", Self::read_canvas(&properties)?)?;
                }
                "camera" => {
                    Self::check_properties(&name, &properties, &["origin", "viewport"]);
                    Self::unique(&mut camera, "camera", Self::read_camera(&properties)?)?;
                }
                "background" => {
                    Self::check_properties(&name, &properties, &["color"]);
                    let color = Self::read_color(&properties)?.unwrap_or_else(Color::black);
                    Self::unique(&mut background, "background", color)?;
                }
                "sphere" => {
                    Self::check_properties(
                        &name,
                        &properties,
                        &["position", "radius", "color", "specular", "reflectiveness"],
                    );
                    scene.objects.push(Self::read_sphere(&properties)?);
                }
                "ambient" | "point" | "directional" => {
                    scene.lights.push(Self::read_light(&name, &properties)?);
                }
                _ => return Err(InterpretError::UnknownObject(name)),
            }
        }

        if let Some(background) = background {
            scene.background = background;
        }
        let (width, height) = canvas.unwrap_or(DEFAULT_CANVAS_SIZE);

        debug!(
            "Interpreted {} spheres and {} lights",
            scene.objects.len(),
            scene.lights.len()
        );

        Ok(Description {
            scene,
            camera: camera.unwrap_or_default(),
            width,
            height,
        })
    }

    fn unique<T>(slot: &mut Option<T>, name: &'static str, value: T) -> Result<(), InterpretError> {
        if slot.is_some() {
            return Err(InterpretError::NonUniqueObject(name));
        }
        *slot = Some(value);
        Ok(())
    }

    /// Warn about properties an object does not use; they are most likely typos.
    fn check_properties(name: &str, properties: &Properties, known: &[&str]) {
        for key in properties.keys() {
            if !known.contains(&key.as_str()) {
                warn!("Ignoring unknown property {} on {}", key, name);
            }
        }
    }

    fn read_canvas(properties: &Properties) -> Result<(u32, u32), InterpretError> {
        let width = required_property!(properties, "width", ast::Node::Number);
        let height = required_property!(properties, "height", ast::Node::Number);

        Ok((
            pixel_count("width", width)?,
            pixel_count("height", height)?,
        ))
    }

    fn read_camera(properties: &Properties) -> Result<Camera, InterpretError> {
        let origin = optional_property!(properties, "origin", ast::Node::Vector).unwrap_or_default();
        let viewport = match optional_property!(properties, "viewport", ast::Node::Vector) {
            Some(v) if v.x > 0. && v.y > 0. && v.z > 0. => Viewport {
                width: v.x,
                height: v.y,
                distance: v.z,
            },
            Some(v) => return Err(InterpretError::OutOfRange("viewport", format!("{:?}", v))),
            None => Viewport::default(),
        };

        Ok(Camera::new(viewport, origin))
    }

    fn read_color(properties: &Properties) -> Result<Option<Color>, InterpretError> {
        let v = match optional_property!(properties, "color", ast::Node::Vector) {
            Some(v) => v,
            None => return Ok(None),
        };

        let channel = |c: f64| {
            if (0. ..=255.).contains(&c) {
                Ok(c as u8)
            } else {
                Err(InterpretError::OutOfRange("color", format!("{:?}", v)))
            }
        };

        Ok(Some(Color::new(channel(v.x)?, channel(v.y)?, channel(v.z)?)))
    }

    fn read_sphere(properties: &Properties) -> Result<Sphere, InterpretError> {
        let position = required_property!(properties, "position", ast::Node::Vector);
        let radius = required_property!(properties, "radius", ast::Node::Number);
        if radius <= 0. {
            return Err(InterpretError::OutOfRange("radius", radius.to_string()));
        }

        Ok(Sphere::new(position, radius, Self::read_material(properties)?))
    }

    fn read_material(properties: &Properties) -> Result<Material, InterpretError> {
        let color = Self::read_color(properties)?.unwrap_or_else(Color::white);

        // -1 is the conventional way of saying "no highlight"
        let specular = match optional_property!(properties, "specular", ast::Node::Number) {
            None => None,
            Some(s) if s == -1. => None,
            Some(s) if s >= 0. && s.fract() == 0. && s <= i32::MAX as f64 => Some(s as i32),
            Some(s) => return Err(InterpretError::OutOfRange("specular", s.to_string())),
        };

        let reflectiveness =
            optional_property!(properties, "reflectiveness", ast::Node::Number).unwrap_or(0.);
        if !(0. ..=1.).contains(&reflectiveness) {
            return Err(InterpretError::OutOfRange(
                "reflectiveness",
                reflectiveness.to_string(),
            ));
        }

        Ok(Material::new(color, specular, reflectiveness))
    }

    fn read_light(name: &str, properties: &Properties) -> Result<Box<dyn Light>, InterpretError> {
        let intensity = required_property!(properties, "intensity", ast::Node::Number);
        if !intensity.is_finite() || intensity < 0. {
            return Err(InterpretError::OutOfRange("intensity", intensity.to_string()));
        }

        let light: Box<dyn Light> = match name {
            "ambient" => {
                Self::check_properties(name, properties, &["intensity"]);
                Box::new(Ambient::new(intensity))
            }
            "point" => {
                Self::check_properties(name, properties, &["intensity", "position"]);
                let position = required_property!(properties, "position", ast::Node::Vector);
                Box::new(Point::new(intensity, position))
            }
            _ => {
                Self::check_properties(name, properties, &["intensity", "direction"]);
                let direction = required_property!(properties, "direction", ast::Node::Vector);
                Box::new(Directional::new(intensity, direction))
            }
        };

        Ok(light)
    }
}
