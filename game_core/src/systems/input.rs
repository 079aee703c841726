use hecs::World;

use crate::{Config, Paddle, PointerInput, Side};

/// Move the player paddle to the latest pointer position, if the pointer moved
pub fn apply_pointer(world: &mut World, pointer: &mut PointerInput, config: &Config) {
    let Some(pointer_y) = pointer.take() else {
        return;
    };

    let target = PointerInput::paddle_target(pointer_y, config);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = target;
        }
    }
}
