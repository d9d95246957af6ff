// Decorative forest scene: a row of trees on a lawn with data "particles"
// drifting down. The scene is pure state; drawing goes through `Painter`.

use std::fmt;

use rand::Rng;

pub const TREE_COUNT: usize = 8;
pub const GROUND_Y: f64 = 250.0;
pub const GROUND_HEIGHT: f64 = 50.0;
pub const GROUND_COLOR: &str = "#90EE90";
pub const TRUNK_COLOR: &str = "#8B4513";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub width: f64,
    pub crown: Hsl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub size: f64,
    pub color: Hsl,
}

/// Drawing surface, implemented over a 2D canvas context in the browser.
pub trait Painter {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

#[derive(Clone, Debug)]
pub struct ForestScene {
    trees: Vec<Tree>,
    particles: Vec<Particle>,
    spawn_probability: f64,
}

impl ForestScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, spawn_probability: f64) -> Self {
        let trees = (0..TREE_COUNT)
            .map(|i| Tree {
                x: 50.0 + i as f64 * 45.0,
                y: GROUND_Y,
                height: 60.0 + rng.gen::<f64>() * 40.0,
                width: 20.0 + rng.gen::<f64>() * 15.0,
                crown: Hsl {
                    hue: 120.0 + rng.gen::<f64>() * 40.0,
                    saturation: 70,
                    lightness: 40,
                },
            })
            .collect();
        Self {
            trees,
            particles: Vec::new(),
            spawn_probability: spawn_probability.clamp(0.0, 1.0),
        }
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Paint one frame and advance every particle by its speed.
    pub fn render_frame<P: Painter, R: Rng + ?Sized>(&mut self, painter: &mut P, rng: &mut R) {
        let width = painter.width();
        let height = painter.height();

        painter.clear();
        painter.fill_rect(0.0, GROUND_Y, width, GROUND_HEIGHT, GROUND_COLOR);
        for tree in &self.trees {
            draw_tree(painter, tree, rng);
        }

        if rng.gen_bool(self.spawn_probability) {
            self.particles.push(Particle {
                x: rng.gen::<f64>() * width,
                y: 0.0,
                speed: 1.0 + rng.gen::<f64>() * 2.0,
                size: 2.0 + rng.gen::<f64>() * 3.0,
                color: Hsl {
                    hue: 200.0 + rng.gen::<f64>() * 60.0,
                    saturation: 70,
                    lightness: 60,
                },
            });
        }

        for particle in &mut self.particles {
            painter.fill_circle(particle.x, particle.y, particle.size, &particle.color.to_string());
            particle.y += particle.speed;
        }
        self.particles.retain(|p| p.y < height);
    }
}

fn draw_tree<P: Painter, R: Rng + ?Sized>(painter: &mut P, tree: &Tree, rng: &mut R) {
    painter.fill_rect(
        tree.x - tree.width / 4.0,
        tree.y - tree.height / 3.0,
        tree.width / 2.0,
        tree.height / 3.0,
        TRUNK_COLOR,
    );
    painter.fill_circle(tree.x, tree.y - tree.height / 2.0, tree.width, &tree.crown.to_string());

    // The highlight picks a fresh hue every frame, which gives the canopy its shimmer.
    let highlight = Hsl {
        hue: 120.0 + rng.gen::<f64>() * 40.0,
        saturation: 80,
        lightness: 50,
    };
    painter.fill_circle(
        tree.x,
        tree.y - tree.height / 1.5,
        tree.width * 0.7,
        &highlight.to_string(),
    );
}
