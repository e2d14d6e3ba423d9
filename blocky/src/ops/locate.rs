use crate::{Block, Pos, Quadrant};

impl Block {
    /// includes the top and left edges but not the bottom and right edges
    pub fn contains(&self, location: Pos) -> bool {
        let relative = location - self.position;
        let size = i64::from(self.size);
        relative.x >= 0 && relative.y >= 0 && relative.x < size && relative.y < size
    }

    /// The block `levels` below this one that contains `location`.
    ///
    /// Stops early at a leaf, so this is the deepest containing block when the tree
    /// is shallower than `levels`. `None` if `location` is outside this block.
    pub fn block_at(&self, location: Pos, levels: u8) -> Option<&Block> {
        if !self.contains(location) {
            return None;
        }
        if levels == 0 || self.is_leaf() {
            return Some(self);
        }
        let quadrant = self.quadrant_of(location);
        self.child(quadrant)?.block_at(location, levels - 1)
    }

    pub fn block_at_mut(&mut self, location: Pos, levels: u8) -> Option<&mut Block> {
        if !self.contains(location) {
            return None;
        }
        if levels == 0 || self.is_leaf() {
            return Some(self);
        }
        let quadrant = self.quadrant_of(location);
        self.child_mut(quadrant)?.block_at_mut(location, levels - 1)
    }

    fn quadrant_of(&self, location: Pos) -> Quadrant {
        Quadrant::from_offset(location - self.position, self.child_size())
    }
}
