use crate::surface::{Element, Surface};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct SurfaceDump<'a> {
    pub containers: Vec<ContainerDump<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ContainerDump<'a> {
    pub id: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Element count per tag below the container's `<svg>`.
    pub elements: BTreeMap<String, usize>,
    pub tree: Option<&'a Element>,
}

impl<'a> SurfaceDump<'a> {
    pub fn from_surface(surface: &'a Surface) -> Self {
        let containers = surface
            .containers
            .iter()
            .map(|container| {
                let svg = container.svg();
                let mut elements = BTreeMap::new();
                if let Some(svg) = svg {
                    for el in svg.descendants() {
                        *elements.entry(el.tag.clone()).or_insert(0) += 1;
                    }
                }
                ContainerDump {
                    id: container.id.clone(),
                    width: svg.and_then(|s| s.get_f64("width")),
                    height: svg.and_then(|s| s.get_f64("height")),
                    elements,
                    tree: svg,
                }
            })
            .collect();
        SurfaceDump { containers }
    }
}

pub fn write_surface_dump(path: &Path, surface: &Surface) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = SurfaceDump::from_surface(surface);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
