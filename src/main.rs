mod logger;

use std::{process, str::FromStr, time::Instant};

use clap::{App, Arg, ArgMatches};
use log::{error, info, LevelFilter};
use raytracer::{
    camera::Camera,
    canvas::Canvas,
    scene,
    sdl::{
        self,
        interpret::{pixel_count, DEFAULT_CANVAS_SIZE},
        Description, InterpretError,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
enum RenderError {
    #[error("{0}")]
    Interpret(#[from] InterpretError),

    #[error("unable to save image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid value for --{0}: {1}")]
    InvalidArgument(&'static str, String),
}

/// Parse an optional numeric argument.
fn numeric_arg<T: FromStr>(matches: &ArgMatches, name: &'static str) -> Result<Option<T>, RenderError> {
    matches
        .value_of(name)
        .map(|value| {
            value
                .parse()
                .map_err(|_| RenderError::InvalidArgument(name, value.to_owned()))
        })
        .transpose()
}

/// Read a canvas side override, falling back to `default` when it is absent.
fn canvas_side(matches: &ArgMatches, name: &'static str, default: u32) -> Result<u32, RenderError> {
    match numeric_arg::<f64>(matches, name)? {
        Some(value) => {
            pixel_count(name, value).map_err(|_| RenderError::InvalidArgument(name, value.to_string()))
        }
        None => Ok(default),
    }
}

fn render(matches: &ArgMatches) -> Result<(), RenderError> {
    let now = Instant::now();

    let Description {
        mut scene,
        camera,
        width,
        height,
    } = match matches.value_of("SOURCE") {
        Some(source) => {
            let description = sdl::load(source)?;
            info!("Scene constructed from {} in {}s", source, now.elapsed().as_secs_f32());
            description
        }
        None => {
            info!("No scene source given, rendering the demo scene");
            Description {
                scene: scene::demo(),
                camera: Camera::default(),
                width: DEFAULT_CANVAS_SIZE.0,
                height: DEFAULT_CANVAS_SIZE.1,
            }
        }
    };

    let width = canvas_side(matches, "width", width)?;
    let height = canvas_side(matches, "height", height)?;
    if let Some(depth) = numeric_arg(matches, "depth")? {
        scene.options.max_ray_depth = depth;
    }

    let output = matches.value_of("output").unwrap_or("render.png");
    let mut canvas = Canvas::new(width, height);
    scene.render_to(&camera, &mut canvas, output)?;

    info!("Operation complete in {}s", now.elapsed().as_secs_f32());
    Ok(())
}

fn app() -> App<'static, 'static> {
    App::new("Raytracer")
        .version("1.0")
        .about("Renders a scene of spheres and lights with recursive ray tracing")
        .arg(
            Arg::with_name("SOURCE")
                .help("The scene source file; the built-in demo scene is rendered when omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .value_name("FILE")
                .help("The output file")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .help("Override the canvas width"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .help("Override the canvas height"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .value_name("BOUNCES")
                .help("Override the maximum number of reflections per ray"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .help("Set the logging level")
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .default_value("info"),
        )
}

fn main() {
    let matches = app().get_matches();

    let level = matches
        .value_of("log-level")
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(LevelFilter::Info);
    logger::init_logger(level);

    if let Err(e) = render(&matches) {
        error!("Failed to render: {}", e);
        process::exit(1);
    }
}
