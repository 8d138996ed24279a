use loam_blocks::BlockId;

/// Whether the face of `current` that touches `neighbor` gets a quad.
///
/// Air always exposes a face. Cacti merge with each other. Opaque blocks
/// show through to water, cacti, leaves and any other non-opaque block.
/// Leaves draw against water. Water only draws against air, so a body of
/// water has no internal faces and no face toward the ground it rests on.
pub fn face_visible(current: BlockId, neighbor: BlockId) -> bool {
    if neighbor == BlockId::Air {
        return true;
    }
    match current {
        BlockId::Cactus => neighbor != BlockId::Cactus,
        BlockId::Leaves => neighbor == BlockId::Water,
        BlockId::Water => false,
        c if c.is_opaque() => {
            matches!(
                neighbor,
                BlockId::Water | BlockId::Cactus | BlockId::Leaves
            ) || !neighbor.is_opaque()
        }
        _ => neighbor == BlockId::Water,
    }
}
