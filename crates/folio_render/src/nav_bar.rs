use bevy::prelude::*;
use folio_core::content::{Link, LinkTarget, PROFILE};
use folio_core::{NAV_BAR_HEIGHT, SectionId};
use folio_shell::nav::NavState;

use crate::links::SectionLink;
use crate::page::{ButtonKind, link_button};
use crate::responsive::{CurrentLayout, DesktopOnly, MobileOnly};
use crate::style::*;

// --- Markers ---

#[derive(Component)]
pub struct NavBarRoot;

/// Nav button; its label color tracks the active section
#[derive(Component)]
pub struct NavItem;

#[derive(Component)]
pub struct MenuToggle;

#[derive(Component)]
pub struct MenuToggleLabel;

/// Overlay column shown while the mobile menu is open
#[derive(Component)]
pub struct MobileMenu;

fn nav_item(parent: &mut ChildBuilder, section: SectionId, size: f32) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                ..default()
            },
            NavItem,
            SectionLink(section),
        ))
        .with_child((Text::new(section.label()), font(size), TextColor(SLATE_300)));
}

/// Initials in the accent color, then a light period
fn logo_runs() -> [(&'static str, Color); 2] {
    [(PROFILE.initials, EMERALD_400), (".", SLATE_100)]
}

pub fn spawn_nav_bar(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(nav_background(false)),
            GlobalZIndex(10),
            NavBarRoot,
        ))
        .with_children(|bar| {
            bar.spawn(Node {
                width: Val::Percent(100.0),
                height: Val::Px(NAV_BAR_HEIGHT),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(24.0)),
                ..default()
            })
            .with_children(|row| {
                // Logo
                row.spawn((Button, Node::default(), SectionLink(SectionId::Home)))
                    .with_children(|logo| {
                        logo.spawn((Text::default(), font(TEXT_2XL), TextColor(EMERALD_400)))
                            .with_children(|text| {
                                for (run, color) in logo_runs() {
                                    text.spawn((TextSpan::new(run), font(TEXT_2XL), TextColor(color)));
                                }
                            });
                    });

                row.spawn((
                    Node {
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                    DesktopOnly,
                ))
                .with_children(|links| {
                    for section in SectionId::ALL {
                        nav_item(links, section, TEXT_SM);
                    }
                    link_button(
                        links,
                        Link {
                            label: "Resume",
                            target: LinkTarget::External(PROFILE.resume),
                        },
                        ButtonKind::Outline,
                    );
                });

                row.spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        ..default()
                    },
                    MenuToggle,
                    MobileOnly,
                ))
                .with_child((Text::new("Menu"), font(TEXT_BASE), TextColor(SLATE_300), MenuToggleLabel));
            });

            bar.spawn((
                Node {
                    display: Display::None,
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::axes(Val::Px(24.0), Val::Px(16.0)),
                    row_gap: Val::Px(4.0),
                    border: UiRect::top(Val::Px(1.0)),
                    ..default()
                },
                BackgroundColor(with_alpha(SLATE_950, 0.98)),
                BorderColor(SLATE_800),
                MobileMenu,
            ))
            .with_children(|menu| {
                for section in SectionId::ALL {
                    nav_item(menu, section, TEXT_BASE);
                }
            });
        });
}

pub fn despawn_nav_bar(mut commands: Commands, query: Query<Entity, With<NavBarRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn menu_toggle_system(
    query: Query<&Interaction, (Changed<Interaction>, With<MenuToggle>)>,
    nav: Option<ResMut<NavState>>,
) {
    let Some(mut nav) = nav else { return };
    for interaction in &query {
        if *interaction == Interaction::Pressed {
            nav.toggle_menu();
            debug!("Mobile menu {}", if nav.menu_open { "open" } else { "closed" });
        }
    }
}

/// Label color for a nav item
fn nav_item_color(section: SectionId, active: SectionId, interaction: Interaction) -> Color {
    if section == active || interaction != Interaction::None {
        EMERALD_400
    } else {
        SLATE_300
    }
}

pub fn nav_item_color_system(
    nav: Option<Res<NavState>>,
    items: Query<(&SectionLink, &Interaction, &Children), With<NavItem>>,
    mut labels: Query<&mut TextColor>,
) {
    let Some(nav) = nav else { return };
    for (link, interaction, children) in &items {
        let color = nav_item_color(link.0, nav.active, *interaction);
        for child in children.iter() {
            if let Ok(mut text_color) = labels.get_mut(*child) {
                if text_color.0 != color {
                    text_color.0 = color;
                }
            }
        }
    }
}

/// Nav background, mobile menu visibility and toggle label follow NavState
pub fn sync_nav_bar(
    nav: Option<Res<NavState>>,
    layout: Res<CurrentLayout>,
    mut bar: Query<&mut BackgroundColor, With<NavBarRoot>>,
    mut menu: Query<&mut Node, With<MobileMenu>>,
    mut label: Query<&mut Text, With<MenuToggleLabel>>,
) {
    let Some(nav) = nav else { return };
    if !nav.is_changed() && !layout.is_changed() {
        return;
    }
    let menu_visible = nav.menu_open && layout.0.is_narrow();

    for mut bg in &mut bar {
        bg.0 = nav_background(nav.scrolled || menu_visible);
    }
    for mut node in &mut menu {
        node.display = if menu_visible { Display::Flex } else { Display::None };
    }
    for mut text in &mut label {
        text.0 = if nav.menu_open { "Close" } else { "Menu" }.to_string();
    }
}
