use glam::Vec2;
use std::f32::consts::PI;

pub trait Interpolatable: Clone + Copy {
    fn zero() -> Self;
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn scale(self, factor: f32) -> Self;
}

impl Interpolatable for f32 {
    fn zero() -> Self { 0.0 }
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f32) -> Self { self * factor }
}

impl Interpolatable for Vec2 {
    fn zero() -> Self { Vec2::ZERO }
    fn add(self, other: Self) -> Self { self + other }
    fn sub(self, other: Self) -> Self { self - other }
    fn scale(self, factor: f32) -> Self { self * factor }
}

/// A mass-spring-damper, the way animation springs are usually specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Spring {
    /// Slightly underdamped; settles in well under a second.
    pub const WRIST: Self = Self::new(120.0, 20.0, 1.0);

    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// `(frequency, damping ratio, response)` for [`SecondOrderDynamics::new`].
    pub fn params(self) -> (f32, f32, f32) {
        let omega = (self.stiffness / self.mass).sqrt();
        let f = omega / (2.0 * PI);
        let z = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());
        (f, z, 0.0)
    }
}

#[derive(Debug, Clone)]
pub struct SecondOrderDynamics<T: Interpolatable> {
    y: T,
    yd: T,
    xp: T,
    k1: f32,
    k2: f32,
    k3: f32,
}

impl<T: Interpolatable> SecondOrderDynamics<T> {
    pub fn new(f: f32, z: f32, r: f32, initial: T) -> Self {
        let (k1, k2, k3) = Self::compute_constants(f, z, r);
        Self {
            y: initial,
            yd: T::zero(),
            xp: initial,
            k1,
            k2,
            k3,
        }
    }

    pub fn from_spring(spring: Spring, initial: T) -> Self {
        let (f, z, r) = spring.params();
        Self::new(f, z, r, initial)
    }

    fn compute_constants(f: f32, z: f32, r: f32) -> (f32, f32, f32) {
        let w = 2.0 * PI * f;
        let k1 = z / (PI * f);
        let k2 = 1.0 / (w * w);
        let k3 = r * z / (PI * f);
        (k1, k2, k3)
    }

    pub fn reset(&mut self, value: T) {
        self.y = value;
        self.yd = T::zero();
        self.xp = value;
    }

    pub fn update(&mut self, x: T, dt: f32) -> T {
        if dt <= 0.0 {
            return self.y;
        }

        let xd = x.sub(self.xp).scale(1.0 / dt);
        self.xp = x;

        let k2_stable = self.k2.max(
            (dt * dt / 2.0 + dt * self.k1 / 2.0).max(dt * self.k1)
        );

        self.y = self.y.add(self.yd.scale(dt));

        let accel = x.add(xd.scale(self.k3))
            .sub(self.y)
            .sub(self.yd.scale(self.k1))
            .scale(1.0 / k2_stable);

        self.yd = self.yd.add(accel.scale(dt));

        self.y
    }

    pub fn current(&self) -> T {
        self.y
    }

    pub fn velocity(&self) -> T {
        self.yd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrist_spring_params() {
        let (f, z, r) = Spring::WRIST.params();
        assert!((f - 1.7434).abs() < 1e-3, "{f}");
        assert!((z - 0.9129).abs() < 1e-3, "{z}");
        assert_eq!(r, 0.0);
    }

    #[test]
    fn settles_on_target() {
        let mut d = SecondOrderDynamics::from_spring(Spring::WRIST, 0.0_f32);
        for _ in 0..240 {
            d.update(30.0, 1.0 / 60.0);
        }
        assert!((d.current() - 30.0).abs() < 0.01, "{}", d.current());
        assert!(d.velocity().abs() < 0.1);
    }

    #[test]
    fn moves_towards_target_without_jumping() {
        let mut d = SecondOrderDynamics::from_spring(Spring::WRIST, Vec2::ZERO);
        d.update(Vec2::new(40.0, 0.0), 1.0 / 60.0);
        let after_two = d.update(Vec2::new(40.0, 0.0), 1.0 / 60.0);
        assert!(after_two.x > 0.0 && after_two.x < 40.0);
    }

    #[test]
    fn zero_dt_holds_position() {
        let mut d = SecondOrderDynamics::from_spring(Spring::WRIST, 5.0_f32);
        assert_eq!(d.update(100.0, 0.0), 5.0);
    }

    #[test]
    fn reset_clears_velocity() {
        let mut d = SecondOrderDynamics::from_spring(Spring::WRIST, 0.0_f32);
        d.update(10.0, 0.1);
        d.reset(3.0);
        assert_eq!(d.current(), 3.0);
        assert_eq!(d.velocity(), 0.0);
    }
}
