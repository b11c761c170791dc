//! Static network topology and the cosmetic flow-dot animation.
//!
//! Node positions live on a fixed 800x400 layout grid (origin top-left, as
//! drawn). The only thing that ever moves is a phase counter cycling 0-99
//! that slides a dot along each connection segment.

/// Width of the layout grid the node coordinates are expressed on.
pub const LAYOUT_WIDTH: f32 = 800.0;
/// Height of the layout grid.
pub const LAYOUT_HEIGHT: f32 = 400.0;
/// Animation phase wraps after this many ticks.
pub const PHASE_STEPS: u8 = 100;
/// Per-connection phase offset so dots do not march in lockstep.
pub const PHASE_STAGGER: u8 = 20;
/// Connection endpoints are inset this far from node centers.
const NODE_EDGE_INSET: f32 = 30.0;

/// Role of a node in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Household,
    Grid,
    Storage,
}

/// Display status of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Online,
    Trading,
    Offline,
}

/// A fixed participant in the network diagram.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: &'static str,
    pub x: f32,
    pub y: f32,
    pub kind: NodeKind,
    /// Current stored/available energy for the badge (kWh).
    pub energy: f32,
    /// Capacity for the badge denominator (kWh).
    pub capacity: f32,
    pub status: NodeStatus,
    /// Solar generation shown on household nodes (kW).
    pub solar_generation_kw: Option<f32>,
    /// Battery level shown on household nodes (%).
    pub battery_level_pct: Option<f32>,
}

/// A directed energy flow between two nodes.
#[derive(Debug, Clone)]
pub struct Connection {
    pub from: &'static str,
    pub to: &'static str,
    /// Labelled flow (kW).
    pub flow_kw: f32,
    pub active: bool,
}

/// A line segment between two node edges, in layout coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    /// Point a fraction `t` in [0, 1] of the way from start to end.
    pub fn lerp(&self, t: f32) -> (f32, f32) {
        (
            self.x1 + (self.x2 - self.x1) * t,
            self.y1 + (self.y2 - self.y1) * t,
        )
    }

    /// Segment midpoint, used for the flow label.
    pub fn midpoint(&self) -> (f32, f32) {
        self.lerp(0.5)
    }
}

/// The full static topology.
#[derive(Debug, Clone)]
pub struct Topology {
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
}

impl Topology {
    /// Builds the fixed seven-node neighborhood layout.
    pub fn neighborhood() -> Self {
        let nodes = vec![
            Node {
                id: "grid",
                x: 400.0,
                y: 50.0,
                kind: NodeKind::Grid,
                energy: 1000.0,
                capacity: 2000.0,
                status: NodeStatus::Online,
                solar_generation_kw: None,
                battery_level_pct: None,
            },
            Node {
                id: "house1",
                x: 100.0,
                y: 150.0,
                kind: NodeKind::Household,
                energy: 80.0,
                capacity: 100.0,
                status: NodeStatus::Trading,
                solar_generation_kw: Some(45.0),
                battery_level_pct: Some(80.0),
            },
            Node {
                id: "house2",
                x: 300.0,
                y: 180.0,
                kind: NodeKind::Household,
                energy: 65.0,
                capacity: 100.0,
                status: NodeStatus::Online,
                solar_generation_kw: Some(38.0),
                battery_level_pct: Some(65.0),
            },
            Node {
                id: "house3",
                x: 500.0,
                y: 160.0,
                kind: NodeKind::Household,
                energy: 92.0,
                capacity: 100.0,
                status: NodeStatus::Trading,
                solar_generation_kw: Some(52.0),
                battery_level_pct: Some(92.0),
            },
            Node {
                id: "house4",
                x: 700.0,
                y: 140.0,
                kind: NodeKind::Household,
                energy: 25.0,
                capacity: 100.0,
                status: NodeStatus::Online,
                solar_generation_kw: Some(15.0),
                battery_level_pct: Some(25.0),
            },
            Node {
                id: "storage1",
                x: 200.0,
                y: 300.0,
                kind: NodeKind::Storage,
                energy: 450.0,
                capacity: 500.0,
                status: NodeStatus::Online,
                solar_generation_kw: None,
                battery_level_pct: None,
            },
            Node {
                id: "storage2",
                x: 600.0,
                y: 320.0,
                kind: NodeKind::Storage,
                energy: 380.0,
                capacity: 500.0,
                status: NodeStatus::Online,
                solar_generation_kw: None,
                battery_level_pct: None,
            },
        ];

        let connections = vec![
            Connection {
                from: "grid",
                to: "house1",
                flow_kw: 15.0,
                active: true,
            },
            Connection {
                from: "house1",
                to: "storage1",
                flow_kw: 25.0,
                active: true,
            },
            Connection {
                from: "house3",
                to: "house4",
                flow_kw: 30.0,
                active: true,
            },
            Connection {
                from: "storage1",
                to: "house2",
                flow_kw: 12.0,
                active: true,
            },
            Connection {
                from: "house3",
                to: "storage2",
                flow_kw: 18.0,
                active: true,
            },
        ];

        Self { nodes, connections }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up a node by id for mutation.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Resolves a connection to a drawable segment, inset from both node
    /// centers. Returns `None` when either endpoint id is unknown or the
    /// nodes coincide.
    pub fn segment(&self, conn: &Connection) -> Option<Segment> {
        let from = self.node(conn.from)?;
        let to = self.node(conn.to)?;
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f32::EPSILON {
            return None;
        }
        let ux = dx / length;
        let uy = dy / length;
        Some(Segment {
            x1: from.x + ux * NODE_EDGE_INSET,
            y1: from.y + uy * NODE_EDGE_INSET,
            x2: to.x - ux * NODE_EDGE_INSET,
            y2: to.y - uy * NODE_EDGE_INSET,
        })
    }

    /// Position of the animated flow dot on connection `idx` at the given
    /// phase. Each connection is staggered so dots travel out of step.
    pub fn flow_dot(&self, idx: usize, phase: u8) -> Option<(f32, f32)> {
        let conn = self.connections.get(idx)?;
        let seg = self.segment(conn)?;
        let staggered =
            (u32::from(phase) + idx as u32 * u32::from(PHASE_STAGGER)) % u32::from(PHASE_STEPS);
        let t = staggered as f32 / f32::from(PHASE_STEPS);
        Some(seg.lerp(t))
    }
}
