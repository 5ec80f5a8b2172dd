use raytracer::{
    camera::{Camera, Viewport},
    canvas::Canvas,
    lighting::{Ambient, Point},
    material::{Color, Material},
    math::Vector3,
    object::Sphere,
    scene::{self, Scene},
    sdl,
};

const GRAY: Color = Color {
    r: 50,
    g: 50,
    b: 50,
};

fn red_sphere_scene() -> Scene {
    Scene {
        objects: vec![Sphere::new(
            Vector3::new(0., 0., 3.),
            1.,
            Material::matte(Color::red()),
        )],
        lights: vec![Box::new(Ambient::new(1.))],
        background: GRAY,
        ..Default::default()
    }
}

/// Screen coordinates of a centered canvas coordinate.
fn screen(canvas: &Canvas, x: i32, y: i32) -> (u32, u32) {
    (
        (x + (canvas.width() / 2) as i32) as u32,
        ((canvas.height() / 2) as i32 - y) as u32,
    )
}

#[test]
fn red_sphere_end_to_end() {
    let scene = red_sphere_scene();
    let mut canvas = Canvas::new(100, 100);
    scene.render(&Camera::default(), &mut canvas);

    let (cx, cy) = screen(&canvas, 0, 0);
    assert_eq!(canvas.get_screen_pixel(cx, cy), Ok(Color::red()));

    // far enough off-axis to miss the sphere
    let (mx, my) = screen(&canvas, -50, 50);
    assert_eq!(canvas.get_screen_pixel(mx, my), Ok(GRAY));
}

#[test]
fn every_coordinate_is_written() {
    // a background no pixel starts with, and no sphere to cover it
    let scene = Scene {
        background: Color::new(1, 2, 3),
        ..Default::default()
    };
    let mut canvas = Canvas::new(6, 4);
    scene.render(&Camera::default(), &mut canvas);

    let mut written = 0;
    for x in 0..6 {
        for y in 0..4 {
            if canvas.get_screen_pixel(x, y) == Ok(Color::new(1, 2, 3)) {
                written += 1;
            }
        }
    }
    assert_eq!(written, canvas.x_range().len() * canvas.y_range().len());
}

#[test]
fn geometry_before_the_viewport_is_clipped() {
    let scene = Scene {
        objects: vec![Sphere::new(
            Vector3::new(0., 0., 0.5),
            0.2,
            Material::matte(Color::white()),
        )],
        lights: vec![Box::new(Ambient::new(1.))],
        background: GRAY,
        ..Default::default()
    };
    let canvas = Canvas::new(10, 10);
    assert_eq!(scene.trace_pixel(&Camera::default(), &canvas, 0, 0), GRAY);
}

#[test]
fn shadowed_point_light_leaves_only_ambient() {
    let floor = Sphere::new(
        Vector3::new(0., -1001., 5.),
        1000.,
        Material::matte(Color::white()),
    );
    let blocker = Sphere::new(
        Vector3::new(0., 1., 5.),
        0.5,
        Material::matte(Color::white()),
    );
    let lights: Vec<Box<dyn raytracer::lighting::Light>> = vec![
        Box::new(Ambient::new(0.2)),
        Box::new(Point::new(0.8, Vector3::new(0., 3., 5.))),
    ];

    let mut scene = Scene {
        objects: vec![floor.clone()],
        lights,
        ..Default::default()
    };

    // looking straight down onto the floor just below the light
    let camera = Camera::new(Viewport::default(), Vector3::new(0., 0.5, 5.));
    let down = raytracer::math::Ray::new(camera.origin, Vector3::new(0., -1., 0.));

    let lit = scene.trace_ray(&down, 0.1, f64::MAX, 0);
    assert_eq!(lit, Color::white());

    scene.objects.push(blocker);
    let shadowed = scene.trace_ray(&down, 0.1, f64::MAX, 0);
    assert_eq!(shadowed, Color::white() * 0.2);
}

#[test]
fn rendering_is_deterministic() {
    let scene = scene::demo();
    let camera = Camera::default();

    let mut first = Canvas::new(48, 48);
    let mut second = Canvas::new(48, 48);
    scene.render(&camera, &mut first);
    scene.render(&camera, &mut second);

    assert_eq!(first, second);
}

#[test]
fn demo_source_matches_builtin_demo() {
    let description = sdl::load(concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/demo.sdl")).unwrap();
    assert_eq!((description.width, description.height), (640, 640));
    assert_eq!(description.scene.objects, scene::demo().objects);

    let mut from_source = Canvas::new(40, 40);
    description.scene.render(&description.camera, &mut from_source);

    let mut builtin = Canvas::new(40, 40);
    scene::demo().render(&Camera::default(), &mut builtin);

    assert_eq!(from_source, builtin);
}

#[test]
fn render_to_writes_an_image() {
    let path = std::env::temp_dir().join("raytracer-render-to-test.png");
    let path = path.to_str().unwrap();

    let mut canvas = Canvas::new(16, 16);
    red_sphere_scene()
        .render_to(&Camera::default(), &mut canvas, path)
        .unwrap();

    let image = image::open(path).unwrap().to_rgb8();
    assert_eq!(image, canvas.to_image());
    std::fs::remove_file(path).unwrap();
}
