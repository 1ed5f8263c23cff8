use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Handle to a node owned by a [`SceneGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightId(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// Local transform of a node. Rotation is XYZ Euler angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

/// Primitive a node is drawn as. Capsules and cylinders are aligned with local +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Group,
    Sphere { radius: f32 },
    Capsule { radius: f32, length: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Plane { width: f32, depth: f32 },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub shape: Shape,
    pub material: Option<MaterialId>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional,
    Point { range: f32 },
    Hemisphere { ground_color: Vec3 },
}

#[derive(Clone, Debug)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
}

impl Material {
    pub fn standard(name: &str, color: Vec3, metalness: f32, roughness: f32) -> Self {
        Self {
            name: name.to_owned(),
            color,
            metalness,
            roughness,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
        }
    }
}

/// Mutable access to the fields the animation loop drives.
///
/// Every accessor returns `None` for a handle the scene does not know; callers
/// treat that as a no-op.
pub trait SceneTargets {
    fn transform(&self, id: NodeId) -> Option<&Transform>;
    fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform>;
    fn light_intensity(&self, id: LightId) -> Option<f32>;
    fn light_intensity_mut(&mut self, id: LightId) -> Option<&mut f32>;
    fn emissive_intensity(&self, id: MaterialId) -> Option<f32>;
    fn emissive_intensity_mut(&mut self, id: MaterialId) -> Option<&mut f32>;
}

/// Flat arena of nodes, lights and materials.
///
/// Nodes are only ever removed all at once through [`SceneGraph::clear`].
#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    names: FnvHashMap<String, NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.lights.clear();
        self.materials.clear();
        self.names.clear();
    }

    pub fn add_node(
        &mut self,
        name: &str,
        parent: Option<NodeId>,
        transform: Transform,
        shape: Shape,
        material: Option<MaterialId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_owned(),
            parent,
            transform,
            shape,
            material,
        });
        self.names.insert(name.to_owned(), id);
        id
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        LightId(self.lights.len() - 1)
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Look a node up by name; the most recently added node wins on duplicates.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Compose local transforms up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.node(id)?;
        let mut m = node.transform.matrix();
        // A stale handle kept across `clear` can form a cycle; cap the walk.
        let mut depth = 0;
        while let Some(parent) = node.parent {
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
            node = self.node(parent)?;
            m = node.transform.matrix() * m;
        }
        Some(m)
    }
}

impl SceneTargets for SceneGraph {
    fn transform(&self, id: NodeId) -> Option<&Transform> {
        self.nodes.get(id.0).map(|n| &n.transform)
    }

    fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id.0).map(|n| &mut n.transform)
    }

    fn light_intensity(&self, id: LightId) -> Option<f32> {
        self.lights.get(id.0).map(|l| l.intensity)
    }

    fn light_intensity_mut(&mut self, id: LightId) -> Option<&mut f32> {
        self.lights.get_mut(id.0).map(|l| &mut l.intensity)
    }

    fn emissive_intensity(&self, id: MaterialId) -> Option<f32> {
        self.materials.get(id.0).map(|m| m.emissive_intensity)
    }

    fn emissive_intensity_mut(&mut self, id: MaterialId) -> Option<&mut f32> {
        self.materials
            .get_mut(id.0)
            .map(|m| &mut m.emissive_intensity)
    }
}
