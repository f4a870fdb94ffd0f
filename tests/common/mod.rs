#![allow(dead_code)]

use std::sync::Arc;

use akari::{
    accel::Accel,
    hit::HitInfo,
    materials::Material,
    math::{Normal, Point2, Point3, Ray, Spectrum},
    sampling::Sampler,
    scene::Scene,
};

/// Infinite plane through `p` with unit normal `n`.
pub struct Plane {
    pub p: Point3<f32>,
    pub n: Normal<f32>,
    pub material: Material,
}

impl Plane {
    pub fn new(p: Point3<f32>, n: Normal<f32>, material: Material) -> Self {
        Self {
            p,
            n: n.normalized(),
            material,
        }
    }

    fn intersect(&self, ray: &Ray<f32>) -> Option<(f32, HitInfo)> {
        let denom = self.n.dot_v(ray.d);
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = self.n.dot_v(self.p - ray.o) / denom;
        if t <= 1e-6 || t >= ray.t {
            return None;
        }

        // Face the incident ray
        let n = if denom > 0.0 { -self.n } else { self.n };
        Some((
            t,
            HitInfo {
                n,
                uv: Point2::zeros(),
                material: self.material.clone(),
            },
        ))
    }
}

pub struct Sphere {
    pub center: Point3<f32>,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    fn intersect(&self, ray: &Ray<f32>) -> Option<(f32, HitInfo)> {
        let oc = ray.o - self.center;
        let a = ray.d.len_sqr();
        let half_b = oc.dot(ray.d);
        let c = oc.len_sqr() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut t = (-half_b - sqrt_d) / a;
        if t <= 1e-6 {
            t = (-half_b + sqrt_d) / a;
        }
        if t <= 1e-6 || t >= ray.t {
            return None;
        }

        let n = Normal::from((ray.point(t) - self.center).normalized());
        Some((
            t,
            HitInfo {
                n,
                uv: Point2::zeros(),
                material: self.material.clone(),
            },
        ))
    }
}

pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
}

/// Brute-force nearest-hit list standing in for the renderer's acceleration
/// structure.
pub struct ListAccel {
    shapes: Vec<Shape>,
}

impl ListAccel {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl Accel for ListAccel {
    fn intersect(&self, ray: &mut Ray<f32>) -> Option<HitInfo> {
        let mut nearest = None;
        for shape in &self.shapes {
            let hit = match shape {
                Shape::Plane(plane) => plane.intersect(ray),
                Shape::Sphere(sphere) => sphere.intersect(ray),
            };
            if let Some((t, info)) = hit {
                ray.t = t;
                nearest = Some(info);
            }
        }
        nearest
    }
}

/// Sampler that replays a fixed list of values, for deterministic light
/// sampling in tests.
pub struct FixedSampler {
    values: Vec<f32>,
    next: usize,
}

impl FixedSampler {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, next: 0 }
    }
}

impl Sampler for FixedSampler {
    fn clone_seeded(&self, _seed: u64) -> Box<dyn Sampler> {
        Box::new(Self {
            values: self.values.clone(),
            next: 0,
        })
    }

    fn next_1d(&mut self) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_2d(&mut self) -> Point2<f32> {
        Point2::new(self.next_1d(), self.next_1d())
    }
}

pub fn empty_scene() -> Scene {
    Scene::new(Vec::new(), Arc::new(ListAccel::new(Vec::new())))
}

pub fn diffuse(kd: Spectrum<f32>) -> Material {
    Material {
        kd,
        ..Material::default()
    }
}

pub fn mirror() -> Material {
    Material {
        kd: Spectrum::zeros(),
        ks: Spectrum::ones(),
        ..Material::default()
    }
}
