//! Mesh geometry boundary
//!
//! The primitive shape library lives outside this crate: it generates and
//! uploads vertex buffers for canonical shapes and exposes one draw call per
//! shape. One upload per shape suffices no matter how many times the shape
//! is drawn.

/// One of the six independently drawable faces of the box primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSide {
    /// Front face (+Z)
    Front,
    /// Back face (-Z)
    Back,
    /// Left face (-X)
    Left,
    /// Right face (+X)
    Right,
    /// Top face (+Y)
    Top,
    /// Bottom face (-Y)
    Bottom,
}

/// Primitive mesh library interface
///
/// `load_*` methods upload geometry once before the first frame; `draw_*`
/// methods submit one draw of the named shape using whatever transform,
/// color/texture, and material state was pushed beforehand.
pub trait ShapeMeshes {
    /// Upload the box mesh
    fn load_box_mesh(&mut self);
    /// Upload the plane mesh
    fn load_plane_mesh(&mut self);
    /// Upload the cylinder mesh
    fn load_cylinder_mesh(&mut self);
    /// Upload the cone mesh
    fn load_cone_mesh(&mut self);
    /// Upload the prism mesh
    fn load_prism_mesh(&mut self);
    /// Upload the four-sided pyramid mesh
    fn load_pyramid4_mesh(&mut self);
    /// Upload the sphere mesh
    fn load_sphere_mesh(&mut self);
    /// Upload the half-sphere mesh
    fn load_half_sphere_mesh(&mut self);
    /// Upload the tapered cylinder mesh
    fn load_tapered_cylinder_mesh(&mut self);
    /// Upload the torus mesh
    fn load_torus_mesh(&mut self);

    /// Draw the full box mesh
    fn draw_box_mesh(&mut self);
    /// Draw a single side of the box mesh
    fn draw_box_mesh_side(&mut self, side: BoxSide);
    /// Draw the plane mesh
    fn draw_plane_mesh(&mut self);
    /// Draw the cylinder mesh
    fn draw_cylinder_mesh(&mut self);
    /// Draw the cone mesh
    fn draw_cone_mesh(&mut self);
    /// Draw the prism mesh
    fn draw_prism_mesh(&mut self);
    /// Draw the four-sided pyramid mesh
    fn draw_pyramid4_mesh(&mut self);
    /// Draw the sphere mesh
    fn draw_sphere_mesh(&mut self);
    /// Draw the half-sphere mesh
    fn draw_half_sphere_mesh(&mut self);
    /// Draw the tapered cylinder mesh
    fn draw_tapered_cylinder_mesh(&mut self);
    /// Draw the torus mesh
    fn draw_torus_mesh(&mut self);
}

/// A draw call recorded by [`RecordingMeshes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshDraw {
    /// Full box draw
    Box,
    /// Single box side draw
    BoxSide(BoxSide),
    /// Plane draw
    Plane,
    /// Cylinder draw
    Cylinder,
    /// Cone draw
    Cone,
    /// Prism draw
    Prism,
    /// Four-sided pyramid draw
    Pyramid4,
    /// Sphere draw
    Sphere,
    /// Half-sphere draw
    HalfSphere,
    /// Tapered cylinder draw
    TaperedCylinder,
    /// Torus draw
    Torus,
}

/// Recording mesh library for headless rendering and tests
#[derive(Debug, Default)]
pub struct RecordingMeshes {
    loads: Vec<&'static str>,
    draws: Vec<MeshDraw>,
}

impl RecordingMeshes {
    /// Create an empty recording mesh library
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the meshes uploaded so far, in upload order
    pub fn loads(&self) -> &[&'static str] {
        &self.loads
    }

    /// Ordered log of every draw call so far
    pub fn draws(&self) -> &[MeshDraw] {
        &self.draws
    }
}

impl ShapeMeshes for RecordingMeshes {
    fn load_box_mesh(&mut self) {
        self.loads.push("box");
    }

    fn load_plane_mesh(&mut self) {
        self.loads.push("plane");
    }

    fn load_cylinder_mesh(&mut self) {
        self.loads.push("cylinder");
    }

    fn load_cone_mesh(&mut self) {
        self.loads.push("cone");
    }

    fn load_prism_mesh(&mut self) {
        self.loads.push("prism");
    }

    fn load_pyramid4_mesh(&mut self) {
        self.loads.push("pyramid4");
    }

    fn load_sphere_mesh(&mut self) {
        self.loads.push("sphere");
    }

    fn load_half_sphere_mesh(&mut self) {
        self.loads.push("half_sphere");
    }

    fn load_tapered_cylinder_mesh(&mut self) {
        self.loads.push("tapered_cylinder");
    }

    fn load_torus_mesh(&mut self) {
        self.loads.push("torus");
    }

    fn draw_box_mesh(&mut self) {
        self.draws.push(MeshDraw::Box);
    }

    fn draw_box_mesh_side(&mut self, side: BoxSide) {
        self.draws.push(MeshDraw::BoxSide(side));
    }

    fn draw_plane_mesh(&mut self) {
        self.draws.push(MeshDraw::Plane);
    }

    fn draw_cylinder_mesh(&mut self) {
        self.draws.push(MeshDraw::Cylinder);
    }

    fn draw_cone_mesh(&mut self) {
        self.draws.push(MeshDraw::Cone);
    }

    fn draw_prism_mesh(&mut self) {
        self.draws.push(MeshDraw::Prism);
    }

    fn draw_pyramid4_mesh(&mut self) {
        self.draws.push(MeshDraw::Pyramid4);
    }

    fn draw_sphere_mesh(&mut self) {
        self.draws.push(MeshDraw::Sphere);
    }

    fn draw_half_sphere_mesh(&mut self) {
        self.draws.push(MeshDraw::HalfSphere);
    }

    fn draw_tapered_cylinder_mesh(&mut self) {
        self.draws.push(MeshDraw::TaperedCylinder);
    }

    fn draw_torus_mesh(&mut self) {
        self.draws.push(MeshDraw::Torus);
    }
}
