use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use folio_core::{PARTICLE_COLOR, SectionId, ViewRect};
use folio_shell::nav::SectionLayout;
use folio_shell::network::ParticleNetwork;
use folio_shell::Settings;

/// Marker for a particle dot in the render world
#[derive(Component)]
pub struct ParticleDot {
    pub index: usize,
}

/// Particle color with the layer opacity folded in
fn layer_color(alpha: f32, layer_opacity: f32) -> Color {
    let [r, g, b, _] = PARTICLE_COLOR;
    Color::srgba(r, g, b, alpha * layer_opacity)
}

/// Spawn one unit-circle mesh per particle, sharing a single material
pub fn spawn_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    network: Option<Res<ParticleNetwork>>,
    settings: Res<Settings>,
) {
    let Some(network) = network else { return };

    let mesh = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from(layer_color(
        PARTICLE_COLOR[3],
        settings.layer_opacity,
    )));

    for (index, p) in network.particles.iter().enumerate() {
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(p.radius)),
            Visibility::Hidden,
            ParticleDot { index },
        ));
    }

    info!("Spawned {} particle dots", network.particles.len());
}

pub fn despawn_particle_visuals(mut commands: Commands, query: Query<Entity, With<ParticleDot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Viewport point -> 2D world point (camera at origin, y up)
fn to_world(x: f32, y: f32, window: &Window) -> Vec2 {
    Vec2::new(x - window.width() * 0.5, window.height() * 0.5 - y)
}

/// The network is anchored to the hero section and clipped to it
fn hero_rect(layout: &SectionLayout, window: &Window) -> ViewRect {
    layout
        .get(SectionId::Home)
        .unwrap_or_else(|| ViewRect::new(0.0, 0.0, window.width(), window.height()))
}

/// Move dots to their particle's position; hide the ones outside the hero
pub fn update_particle_visuals(
    network: Option<Res<ParticleNetwork>>,
    layout: Option<Res<SectionLayout>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut Transform, &mut Visibility, &ParticleDot)>,
) {
    let (Some(network), Some(layout)) = (network, layout) else {
        return;
    };
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let hero = hero_rect(&layout, window);

    for (mut transform, mut visibility, dot) in query.iter_mut() {
        let Some(p) = network.particles.get(dot.index) else {
            continue;
        };
        let y = hero.top + p.y;
        let inside = hero.spans_y(y) && p.x >= 0.0 && p.x <= hero.width();
        *visibility = if inside { Visibility::Inherited } else { Visibility::Hidden };

        let pos = to_world(hero.left + p.x, y, window);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

/// Proximity lines, redrawn every frame
pub fn draw_particle_links(
    mut gizmos: Gizmos,
    network: Option<Res<ParticleNetwork>>,
    layout: Option<Res<SectionLayout>>,
    settings: Res<Settings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let (Some(network), Some(layout)) = (network, layout) else {
        return;
    };
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let hero = hero_rect(&layout, window);

    for link in &network.links {
        let (Some(a), Some(b)) = (network.particles.get(link.a), network.particles.get(link.b)) else {
            continue;
        };
        let (ay, by) = (hero.top + a.y, hero.top + b.y);
        if !hero.spans_y(ay) || !hero.spans_y(by) {
            continue;
        }
        gizmos.line_2d(
            to_world(hero.left + a.x, ay, window),
            to_world(hero.left + b.x, by, window),
            layer_color(link.opacity, settings.layer_opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_maps_corners() {
        let window = Window::default();
        let (w, h) = (window.width(), window.height());
        assert_eq!(to_world(0.0, 0.0, &window), Vec2::new(-w / 2.0, h / 2.0));
        assert_eq!(to_world(w, h, &window), Vec2::new(w / 2.0, -h / 2.0));
    }

    #[test]
    fn test_layer_color_scales_alpha() {
        let c = layer_color(0.5, 0.3).to_srgba();
        assert!((c.alpha - 0.15).abs() < 1e-6);
    }
}
