//! Built-in catalog of exercise worlds.

use crate::error::{MundosError, MundosResult};
use crate::theme::{ColorScheme, WorldTheme};

/// A single exercise inside a world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub title: &'static str,
    /// Expected time to complete, in whole seconds
    pub duration_secs: u64,
    /// Length of the accompanying video, in seconds (0 = no video)
    pub video_secs: u32,
    /// Experience points awarded on completion
    pub xp: u32,
}

/// A themed group of exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    pub id: u32,
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub scheme: ColorScheme,
    pub exercises: &'static [Exercise],
}

impl World {
    /// Route path of this world's page
    pub fn path(&self) -> String {
        format!("{}/{}", crate::world::WORLD_PAGE_PREFIX, self.id)
    }

    /// Style tokens for this world's page
    pub fn theme(&self) -> WorldTheme {
        WorldTheme::from_scheme(&self.scheme)
    }

    /// Sum of exercise durations in seconds
    pub fn total_seconds(&self) -> u64 {
        self.exercises.iter().map(|e| e.duration_secs).sum()
    }

    /// XP available in this world
    pub fn total_xp(&self) -> u64 {
        self.exercises.iter().map(|e| u64::from(e.xp)).sum()
    }
}

/// All worlds, in display order
pub const WORLDS: &[World] = &[
    World {
        id: 1,
        slug: "bosque",
        name: "Bosque de la Calma",
        tagline: "Respiración y movilidad suave",
        scheme: ColorScheme {
            name: "Bosque",
            primary: "#15803d",
            secondary: "#065f46",
            accent: "#a3e635",
        },
        exercises: &[
            Exercise { id: 101, title: "Respiración cuadrada", duration_secs: 120, video_secs: 95, xp: 20 },
            Exercise { id: 102, title: "Movilidad de cuello", duration_secs: 90, video_secs: 75, xp: 15 },
            Exercise { id: 103, title: "Estiramiento de espalda", duration_secs: 185, video_secs: 0, xp: 30 },
        ],
    },
    World {
        id: 2,
        slug: "oceano",
        name: "Océano Profundo",
        tagline: "Resistencia y ritmo constante",
        scheme: ColorScheme {
            name: "Océano",
            primary: "#0ea5e9",
            secondary: "#1e3a8a",
            accent: "#5eead4",
        },
        exercises: &[
            Exercise { id: 201, title: "Marcha en el sitio", duration_secs: 300, video_secs: 240, xp: 40 },
            Exercise { id: 202, title: "Sentadillas lentas", duration_secs: 45, video_secs: 61, xp: 25 },
        ],
    },
    World {
        id: 3,
        slug: "volcan",
        name: "Volcán Ardiente",
        tagline: "Fuerza e intervalos intensos",
        scheme: ColorScheme {
            name: "Volcán",
            primary: "#dc2626",
            secondary: "#7c2d12",
            accent: "#fbbf24",
        },
        exercises: &[
            Exercise { id: 301, title: "Flexiones inclinadas", duration_secs: 60, video_secs: 58, xp: 35 },
            Exercise { id: 302, title: "Plancha", duration_secs: 30, video_secs: 0, xp: 30 },
            Exercise { id: 303, title: "Intervalos de saltos", duration_secs: 600, video_secs: 605, xp: 80 },
        ],
    },
];

/// Look up a world by id
pub fn find_world(id: u32) -> MundosResult<&'static World> {
    WORLDS
        .iter()
        .find(|w| w.id == id)
        .ok_or(MundosError::WorldNotFound(id))
}
