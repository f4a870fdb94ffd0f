mod common;

use std::sync::Arc;

use approx::assert_abs_diff_eq;

use akari::{
    integrator::{render_rays, GlossyReflector, Integrator, RayType, Whitted, WhittedParams},
    lights::{Light, PointLight},
    materials::Material,
    math::{Normal, Point2, Point3, Ray, Spectrum, Vec3},
    sampling::UniformSampler,
    scene::{ConstantBackground, Scene},
    shading::ShadingModel,
    state::{Features, RenderState},
};

use common::{diffuse, empty_scene, mirror, ListAccel, Plane, Shape};

fn floor(material: Material) -> Shape {
    Shape::Plane(Plane::new(
        Point3::zeros(),
        Normal::new(0.0, 1.0, 0.0),
        material,
    ))
}

#[test]
fn miss_returns_environment() {
    let background = Spectrum::new(0.25, 0.5, 0.75);
    let scene = empty_scene().with_background(Arc::new(ConstantBackground::new(background)));
    let features = Features::default();
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let result = whitted.li(
        &mut state,
        Ray::unbounded(Point3::zeros(), Vec3::new(0.0, 1.0, 0.0)),
        0,
    );

    assert_eq!(result.li, background);
    assert_eq!(result.ray_scene_intersections, 1);
}

#[test]
fn lambertian_point_light_end_to_end() {
    let light_color = Spectrum::new(1.0, 0.5, 0.25);
    let light_position = Point3::new(2.0, 2.0, 0.0);
    let scene = Scene::new(
        vec![Light::Point(PointLight {
            position: light_position,
            color: light_color,
        })],
        Arc::new(ListAccel::new(vec![floor(diffuse(Spectrum::ones()))])),
    );
    let features = Features {
        enable_shadows: false,
        enable_reflections: false,
        enable_shading: true,
        shading_model: ShadingModel::Lambertian,
        ..Features::default()
    };
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let result = whitted.li(
        &mut state,
        Ray::unbounded(Point3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0).normalized()),
        0,
    );

    // Hit point is the origin, so L = normalize(light - origin)
    let l = (light_position - Point3::zeros()).normalized();
    let cos_theta = l.dot(Vec3::new(0.0, 1.0, 0.0)).max(0.0);
    assert_abs_diff_eq!(result.li, light_color * cos_theta, epsilon = 1e-5);
}

#[test]
fn hall_of_mirrors_terminates_at_max_depth() {
    let scene = Scene::new(
        Vec::new(),
        Arc::new(ListAccel::new(vec![
            floor(mirror()),
            Shape::Plane(Plane::new(
                Point3::new(0.0, 4.0, 0.0),
                Normal::new(0.0, -1.0, 0.0),
                mirror(),
            )),
        ])),
    );
    let features = Features {
        enable_shadows: false,
        enable_reflections: true,
        ..Features::default()
    };
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let result = whitted.li(
        &mut state,
        Ray::unbounded(Point3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        0,
    );

    // Nodes at depths 0..=5 spawn one mirror child each, depth 6 stops
    assert_eq!(result.ray_scene_intersections, 7);
    assert!(!result.li.has_nans());
}

#[test]
fn transparency_blends_with_passthrough() {
    let glass = Material {
        kd: Spectrum::new(0.2, 0.2, 0.2),
        transparency: 0.5,
        ..Material::default()
    };
    let scene = Scene::new(
        vec![Light::Point(PointLight {
            position: Point3::new(0.0, 5.0, 0.0),
            color: Spectrum::ones(),
        })],
        Arc::new(ListAccel::new(vec![
            floor(diffuse(Spectrum::ones())),
            Shape::Plane(Plane::new(
                Point3::new(0.0, 1.0, 0.0),
                Normal::new(0.0, 1.0, 0.0),
                glass,
            )),
        ])),
    );
    let features = Features {
        enable_shadows: false,
        enable_transparency: true,
        enable_reflections: false,
        enable_shading: false,
        ..Features::default()
    };
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let result = whitted.li(
        &mut state,
        Ray::unbounded(Point3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        0,
    );

    // Glass contributes light * kd = 0.2, the floor behind it 1.0;
    // lerp(0.2, 1.0, transparency 0.5) = 0.6
    assert_abs_diff_eq!(result.li, Spectrum::new(0.6, 0.6, 0.6), epsilon = 1e-5);
}

struct MirrorGlossy;

impl GlossyReflector for MirrorGlossy {
    fn perturb(&self, mirror: Vec3<f32>, _shininess: f32, _u: Point2<f32>) -> Vec3<f32> {
        mirror
    }
}

#[test]
fn glossy_mode_routes_through_collaborator() {
    let background = Spectrum::new(0.3, 0.3, 0.3);
    let scene = Scene::new(
        Vec::new(),
        Arc::new(ListAccel::new(vec![floor(mirror())])),
    )
    .with_background(Arc::new(ConstantBackground::new(background)));
    let features = Features {
        enable_shadows: false,
        enable_reflections: true,
        enable_glossy_reflection: true,
        ..Features::default()
    };

    let ray = Ray::unbounded(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

    // Without a collaborator the glossy branch cannot spawn a child
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };
    let without = Whitted::new(WhittedParams::default()).li(&mut state, ray, 0);
    assert_eq!(without.li, Spectrum::zeros());

    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };
    let with = Whitted::new(WhittedParams::default())
        .with_glossy(Arc::new(MirrorGlossy))
        .li(&mut state, ray, 0);
    // An identity perturbation reproduces the mirror result
    assert_abs_diff_eq!(with.li, background, epsilon = 1e-6);
}

#[test]
fn collected_rays_tag_branches() {
    let scene = Scene::new(
        vec![Light::Point(PointLight {
            position: Point3::new(0.0, 5.0, 0.0),
            color: Spectrum::ones(),
        })],
        Arc::new(ListAccel::new(vec![floor(mirror())])),
    );
    let features = Features {
        enable_shadows: true,
        enable_reflections: true,
        ..Features::default()
    };
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: true,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let result = whitted.li(
        &mut state,
        Ray::unbounded(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        0,
    );

    assert_eq!(result.rays[0].ray_type, RayType::Direct);
    assert!(result
        .rays
        .iter()
        .any(|r| r.ray_type == RayType::Shadow));
    assert!(result
        .rays
        .iter()
        .any(|r| r.ray_type == RayType::Reflection));
}

#[test]
fn render_rays_averages_batch() {
    let background = Spectrum::new(0.5, 0.5, 0.5);
    let scene = empty_scene().with_background(Arc::new(ConstantBackground::new(background)));
    let features = Features::default();
    let mut sampler = UniformSampler::new(1);
    let mut state = RenderState {
        scene: &scene,
        features: &features,
        sampler: &mut sampler,
        collect_rays: false,
    };

    let whitted = Whitted::new(WhittedParams::default());
    let rays = [
        Ray::unbounded(Point3::zeros(), Vec3::new(0.0, 1.0, 0.0)),
        Ray::unbounded(Point3::zeros(), Vec3::new(1.0, 0.0, 0.0)),
    ];

    let averaged = render_rays(&whitted, &mut state, &rays, 0);
    assert_abs_diff_eq!(averaged, background, epsilon = 1e-6);

    let empty = render_rays(&whitted, &mut state, &[], 0);
    assert_eq!(empty, Spectrum::zeros());
}
