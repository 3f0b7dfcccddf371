//! Camera state types
//!
//! [`SceneCamera`] is the contract the converter needs from a scene-graph
//! camera. [`PerspectiveCamera`] implements it on glam double-precision
//! types with the usual node semantics: a local matrix composed from
//! position/rotation/scale, a world matrix, and a flag that stops the local
//! matrix being recomposed once a matrix was assigned directly.

use glam::{DMat4, DQuat, DVec3};

/// Default vertical field of view in degrees
pub const DEFAULT_CAMERA_FOV: f64 = 50.0;

/// Operations the converter performs on a camera.
///
/// Matrices are column-major. Angles are degrees unless stated otherwise.
pub trait SceneCamera {
    /// Vertical field of view in degrees
    fn fov(&self) -> f64;
    fn set_fov(&mut self, degrees: f64);

    fn aspect(&self) -> f64;
    fn set_aspect(&mut self, aspect: f64);

    fn near(&self) -> f64;
    fn set_near(&mut self, near: f64);

    fn far(&self) -> f64;
    fn set_far(&mut self, far: f64);

    /// Recompute the projection matrix from fov/aspect/near/far
    fn update_projection_matrix(&mut self);

    fn matrix_world(&self) -> DMat4;
    /// Assign the world matrix directly
    fn set_matrix_world(&mut self, matrix: DMat4);

    /// Split the world matrix back into position/rotation/scale
    fn decompose_matrix_world(&mut self);

    /// Enable or disable recomposing the local matrix from position/rotation/scale
    fn set_matrix_auto_update(&mut self, enabled: bool);

    /// Compose the local matrix from position/rotation/scale
    fn update_matrix(&mut self);

    /// Refresh the world matrix from the local matrix
    fn update_matrix_world(&mut self);

    /// Camera position in world space
    fn world_position(&self) -> DVec3 {
        self.matrix_world().w_axis.truncate()
    }

    /// Camera orientation in world space
    fn world_quaternion(&self) -> DQuat {
        let (_, rotation, _) = self.matrix_world().to_scale_rotation_translation();
        rotation
    }
}

/// Perspective camera node without a parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov: f64,
    /// Width / height
    pub aspect: f64,
    /// Near clipping plane
    pub near: f64,
    /// Far clipping plane
    pub far: f64,
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
    /// Local transform
    pub matrix: DMat4,
    /// Camera-to-world transform
    pub matrix_world: DMat4,
    /// World-to-camera transform (view matrix)
    pub matrix_world_inverse: DMat4,
    pub projection_matrix: DMat4,
    /// Recompose `matrix` from position/rotation/scale on world updates
    pub matrix_auto_update: bool,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_FOV, 1.0, 0.1, 2000.0)
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        let mut camera = Self {
            fov,
            aspect,
            near,
            far,
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            matrix: DMat4::IDENTITY,
            matrix_world: DMat4::IDENTITY,
            matrix_world_inverse: DMat4::IDENTITY,
            projection_matrix: DMat4::IDENTITY,
            matrix_auto_update: true,
        };
        camera.update_projection_matrix();
        camera
    }
}

impl SceneCamera for PerspectiveCamera {
    fn fov(&self) -> f64 {
        self.fov
    }

    fn set_fov(&mut self, degrees: f64) {
        self.fov = degrees;
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect;
    }

    fn near(&self) -> f64 {
        self.near
    }

    fn set_near(&mut self, near: f64) {
        self.near = near;
    }

    fn far(&self) -> f64 {
        self.far
    }

    fn set_far(&mut self, far: f64) {
        self.far = far;
    }

    fn update_projection_matrix(&mut self) {
        self.projection_matrix =
            DMat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far);
    }

    fn matrix_world(&self) -> DMat4 {
        self.matrix_world
    }

    fn set_matrix_world(&mut self, matrix: DMat4) {
        self.matrix_world = matrix;
    }

    fn decompose_matrix_world(&mut self) {
        let (scale, rotation, translation) = self.matrix_world.to_scale_rotation_translation();
        self.position = translation;
        self.rotation = rotation;
        self.scale = scale;
    }

    fn set_matrix_auto_update(&mut self, enabled: bool) {
        self.matrix_auto_update = enabled;
    }

    fn update_matrix(&mut self) {
        self.matrix = DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.position);
    }

    fn update_matrix_world(&mut self) {
        if self.matrix_auto_update {
            self.update_matrix();
        }
        self.matrix_world = self.matrix;
        self.matrix_world_inverse = self.matrix_world.inverse();
    }
}

/// Lets a converter borrow a camera instead of owning it
impl<T: SceneCamera + ?Sized> SceneCamera for &mut T {
    fn fov(&self) -> f64 {
        (**self).fov()
    }

    fn set_fov(&mut self, degrees: f64) {
        (**self).set_fov(degrees)
    }

    fn aspect(&self) -> f64 {
        (**self).aspect()
    }

    fn set_aspect(&mut self, aspect: f64) {
        (**self).set_aspect(aspect)
    }

    fn near(&self) -> f64 {
        (**self).near()
    }

    fn set_near(&mut self, near: f64) {
        (**self).set_near(near)
    }

    fn far(&self) -> f64 {
        (**self).far()
    }

    fn set_far(&mut self, far: f64) {
        (**self).set_far(far)
    }

    fn update_projection_matrix(&mut self) {
        (**self).update_projection_matrix()
    }

    fn matrix_world(&self) -> DMat4 {
        (**self).matrix_world()
    }

    fn set_matrix_world(&mut self, matrix: DMat4) {
        (**self).set_matrix_world(matrix)
    }

    fn decompose_matrix_world(&mut self) {
        (**self).decompose_matrix_world()
    }

    fn set_matrix_auto_update(&mut self, enabled: bool) {
        (**self).set_matrix_auto_update(enabled)
    }

    fn update_matrix(&mut self) {
        (**self).update_matrix()
    }

    fn update_matrix_world(&mut self) {
        (**self).update_matrix_world()
    }

    fn world_position(&self) -> DVec3 {
        (**self).world_position()
    }

    fn world_quaternion(&self) -> DQuat {
        (**self).world_quaternion()
    }
}
