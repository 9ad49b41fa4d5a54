//! Text exports: ASCII map and Wavefront OBJ.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::CaveBuild;

/// The padded grid as text, top row first, `#` for wall and `.` for open.
pub fn ascii_map(build: &CaveBuild) -> String {
    build.grid.to_ascii()
}

/// Writes the floor (with texture coordinates) and the walls as two OBJ groups.
pub fn write_obj<W: Write>(out: &mut W, build: &CaveBuild) -> io::Result<()> {
    let floor = &build.floor.mesh;
    let walls = &build.walls;
    writeln!(out, "# cavern seed {:?}", build.seed)?;
    writeln!(out, "o cave")?;

    for p in floor.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    let textured = floor.uv.len() == floor.vertex_count() * 2;
    if textured {
        for uv in floor.uv.chunks_exact(2) {
            writeln!(out, "vt {} {}", uv[0], uv[1])?;
        }
    }
    writeln!(out, "g floor")?;
    for [a, b, c] in floor.triangles() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        if textured {
            writeln!(out, "f {a}/{a} {b}/{b} {c}/{c}")?;
        } else {
            writeln!(out, "f {a} {b} {c}")?;
        }
    }

    for p in walls.positions() {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    writeln!(out, "g walls")?;
    let base = floor.vertex_count() as u32 + 1;
    for [a, b, c] in walls.triangles() {
        writeln!(out, "f {} {} {}", a + base, b + base, c + base)?;
    }
    Ok(())
}

pub fn save_obj(path: &Path, build: &CaveBuild) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_obj(&mut out, build)?;
    out.flush()?;
    log::info!(
        "wrote {} ({} floor + {} wall vertices)",
        path.display(),
        build.floor.vertex_count(),
        build.walls.vertex_count()
    );
    Ok(())
}
