//! Text snapshot of the strip around the player

use glam::IVec3;
use voxrun_core::entity::Player;
use voxrun_core::simulation::ParticleSystem;
use voxrun_core::world::{PLAYFIELD_Z, VoxelGrid, cell_at};

const EMPTY: char = ' ';
const PLAYER: char = '@';
const PARTICLE: char = '*';

/// Render a `width` x `height` window of the playfield centered on the
/// player, top row first. Blocks use [`BlockType::glyph`].
///
/// [`BlockType::glyph`]: voxrun_core::world::BlockType::glyph
pub fn render_strip(
    grid: &VoxelGrid,
    player: &Player,
    particles: &ParticleSystem,
    width: u32,
    height: u32,
) -> String {
    let center = cell_at(player.position);
    let left = center.x - (width / 2) as i32;
    let top = center.y + (height / 2) as i32;

    let mut rows: Vec<Vec<char>> = (0..height)
        .map(|row| {
            let y = top - row as i32;
            (0..width)
                .map(|col| {
                    grid.get(IVec3::new(left + col as i32, y, PLAYFIELD_Z))
                        .map_or(EMPTY, |block| block.glyph())
                })
                .collect()
        })
        .collect();

    let mut plot = |cell: IVec3, glyph: char| {
        let col = cell.x - left;
        let row = top - cell.y;
        if (0..width as i32).contains(&col) && (0..height as i32).contains(&row) {
            rows[row as usize][col as usize] = glyph;
        }
    };

    for particle in particles.iter() {
        if particle.position.is_finite() {
            plot(cell_at(particle.position), PARTICLE);
        }
    }
    plot(center, PLAYER);

    let mut out = String::with_capacity(((width + 3) * (height + 2)) as usize);
    let border = "-".repeat(width as usize);
    out.push('+');
    out.push_str(&border);
    out.push_str("+\n");
    for row in rows {
        out.push('|');
        out.extend(row);
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&border);
    out.push('+');
    out
}
