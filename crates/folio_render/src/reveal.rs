use bevy::prelude::*;
use folio_effects::reveal::{self, Reveal};

/// When the page was mounted, in seconds of app time
#[derive(Resource, Debug, Clone, Copy)]
pub struct PageClock {
    pub mounted_at: f32,
}

/// Entrance animation played once after mount.
/// Fades the entity's text and that of its descendants, and slides the node up.
#[derive(Component, Debug, Clone, Copy)]
pub struct RevealOnMount {
    pub reveal: Reveal,
    done: bool,
}

impl RevealOnMount {
    pub fn new(reveal: Reveal) -> Self {
        Self { reveal, done: false }
    }
}

fn fade_text(color: &mut TextColor, alpha: f32) {
    color.0.set_alpha(alpha);
}

pub fn animate_reveals(
    time: Res<Time>,
    clock: Option<Res<PageClock>>,
    mut roots: Query<(Entity, &mut RevealOnMount, &mut Node)>,
    children: Query<&Children>,
    mut texts: Query<&mut TextColor>,
) {
    let Some(clock) = clock else { return };
    let t = time.elapsed_secs() - clock.mounted_at;

    for (entity, mut reveal, mut node) in &mut roots {
        if reveal.done {
            continue;
        }
        let (alpha, offset) = reveal.reveal.sample(t);
        // Fade-only reveals leave positioning to layout
        if reveal.reveal.offset != 0.0 {
            node.top = Val::Px(offset);
        }

        if let Ok(mut color) = texts.get_mut(entity) {
            fade_text(&mut color, alpha);
        }
        for child in children.iter_descendants(entity) {
            if let Ok(mut color) = texts.get_mut(child) {
                fade_text(&mut color, alpha);
            }
        }
        reveal.done = reveal.reveal.is_done(t);
    }
}

/// Bounce cycle of the scroll hint, seconds
const HINT_PERIOD: f32 = 1.0;
/// Bounce height of the scroll hint, px
const HINT_HEIGHT: f32 = 8.0;

/// "Scroll down" glyph at the foot of the hero
#[derive(Component)]
pub struct ScrollHint;

pub fn bounce_scroll_hint(
    time: Res<Time>,
    clock: Option<Res<PageClock>>,
    mut query: Query<&mut Node, With<ScrollHint>>,
) {
    let Some(clock) = clock else { return };
    let t = time.elapsed_secs() - clock.mounted_at;
    for mut node in &mut query {
        node.top = Val::Px(-reveal::bounce_lift(t, HINT_PERIOD, HINT_HEIGHT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reveal_fades_descendants_and_settles() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(PageClock { mounted_at: 0.0 })
            .add_systems(Update, animate_reveals);

        let child = app
            .world_mut()
            .spawn((Text::new("hi"), TextColor(Color::WHITE)))
            .id();
        let root = app
            .world_mut()
            .spawn((Node::default(), RevealOnMount::new(Reveal::slide_up(0.0))))
            .add_child(child)
            .id();

        app.update();
        let alpha = app.world().get::<TextColor>(child).map(|c| c.0.alpha());
        assert!(alpha.is_some_and(|a| a < 0.5), "text should start faded");

        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .advance_by(Duration::from_secs(2));
        app.update();

        let alpha = app.world().get::<TextColor>(child).map(|c| c.0.alpha());
        assert_eq!(alpha, Some(1.0));
        assert_eq!(app.world().get::<Node>(root).map(|n| n.top), Some(Val::Px(0.0)));
    }

    #[test]
    fn test_fade_reveal_keeps_layout_offsets() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(PageClock { mounted_at: 0.0 })
            .add_systems(Update, animate_reveals);

        let node = Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(32.0),
            ..default()
        };
        let entity = app
            .world_mut()
            .spawn((node, RevealOnMount::new(Reveal::fade(1.0, 1.0))))
            .id();
        app.update();

        let node = app.world().get::<Node>(entity).cloned();
        assert_eq!(node.as_ref().map(|n| n.top), Some(Val::Auto));
        assert_eq!(node.map(|n| n.bottom), Some(Val::Px(32.0)));
    }

    #[test]
    fn test_scroll_hint_starts_lifted() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(PageClock { mounted_at: 0.0 })
            .add_systems(Update, bounce_scroll_hint);
        let hint = app.world_mut().spawn((Node::default(), ScrollHint)).id();
        app.update();

        let top = app.world().get::<Node>(hint).map(|n| n.top);
        let Some(Val::Px(top)) = top else {
            panic!("scroll hint has no pixel offset: {:?}", top);
        };
        assert!((-HINT_HEIGHT..=0.0).contains(&top));
        assert!(top < -HINT_HEIGHT * 0.9, "hint should start near the top of its bounce");
    }
}
