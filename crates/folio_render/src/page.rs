use bevy::prelude::*;
use folio_core::content::{self, Heading, Link, LinkTarget, Span, Tone};
use folio_core::SectionId;
use folio_effects::counter::AnimatedCounter;
use folio_effects::reveal::Reveal;
use folio_shell::Settings;

use super::counters::CounterView;
use super::links::{ButtonTint, HoverText, OutboundLink, SectionLink};
use super::responsive::ResponsiveGrid;
use super::reveal::{PageClock, RevealOnMount, ScrollHint};
use super::style::*;

/// The scrolling container holding every section
#[derive(Component)]
pub struct ScrollRoot;

/// Section anchor used for navigation and active-section detection
#[derive(Component, Debug, Clone, Copy)]
pub struct SectionAnchor(pub SectionId);

/// Build the page. Runs on mount.
pub fn spawn_page(mut commands: Commands, settings: Res<Settings>, time: Res<Time>) {
    commands.insert_resource(PageClock {
        mounted_at: time.elapsed_secs(),
    });

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                overflow: Overflow::scroll_y(),
                ..default()
            },
            ScrollPosition::default(),
            ScrollRoot,
        ))
        .with_children(|page| {
            spawn_hero(page);
            spawn_metrics(page, &settings);
            spawn_about(page);
            spawn_experience(page);
            spawn_projects(page);
            spawn_skills(page);
            spawn_achievements(page);
            spawn_contact(page);
            spawn_footer(page);
        });

    info!("Page mounted: {} sections", SectionId::ALL.len());
}

pub fn despawn_page(mut commands: Commands, query: Query<Entity, With<ScrollRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<PageClock>();
}

// --- Building blocks ---

/// Full-width band with a centered content column
fn section(
    parent: &mut ChildBuilder,
    anchor: Option<SectionId>,
    background: Color,
    max_width: f32,
    build: impl FnOnce(&mut ChildBuilder),
) {
    let mut band = parent.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::vertical(Val::Px(80.0)),
            ..default()
        },
        BackgroundColor(background),
    ));
    if let Some(id) = anchor {
        band.insert(SectionAnchor(id));
    }
    band.with_children(|band| {
        band.spawn(Node {
            width: Val::Percent(100.0),
            max_width: Val::Px(max_width),
            flex_direction: FlexDirection::Column,
            padding: UiRect::horizontal(Val::Px(24.0)),
            row_gap: Val::Px(24.0),
            ..default()
        })
        .with_children(build);
    });
}

fn heading(parent: &mut ChildBuilder, heading: &Heading) {
    parent
        .spawn((
            Text::default(),
            font(TEXT_5XL),
            TextColor(SLATE_100),
            TextLayout::new_with_justify(JustifyText::Center),
            Node {
                margin: UiRect::bottom(Val::Px(24.0)),
                align_self: AlignSelf::Center,
                ..default()
            },
        ))
        .with_children(|text| {
            text.spawn((TextSpan::new(heading.lead), font(TEXT_5XL), TextColor(SLATE_100)));
            text.spawn((TextSpan::new(heading.accent), font(TEXT_5XL), TextColor(EMERALD_400)));
        });
}

fn label(parent: &mut ChildBuilder, text: &str, size: f32, color: Color) {
    parent.spawn((Text::new(text), font(size), TextColor(color)));
}

/// Text made of plain and accented runs
fn rich_text(parent: &mut ChildBuilder, spans: &[Span], size: f32, color: Color) {
    parent
        .spawn((Text::default(), font(size), TextColor(color)))
        .with_children(|text| {
            for span in spans {
                let tint = match span {
                    Span::Plain(_) => color,
                    Span::Accent(_) => EMERALD_400,
                };
                text.spawn((TextSpan::new(span.text()), font(size), TextColor(tint)));
            }
        });
}

fn card(parent: &mut ChildBuilder, border: Color, build: impl FnOnce(&mut ChildBuilder)) {
    parent
        .spawn((
            Node {
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(12.0),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(card_background()),
            BorderColor(border),
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(build);
}

/// Responsive grid; column counts for narrow / medium / wide viewports
fn grid(parent: &mut ChildBuilder, columns: ResponsiveGrid, build: impl FnOnce(&mut ChildBuilder)) {
    parent
        .spawn((
            Node {
                display: Display::Grid,
                width: Val::Percent(100.0),
                grid_template_columns: RepeatedGridTrack::flex(columns.wide, 1.0),
                column_gap: Val::Px(24.0),
                row_gap: Val::Px(24.0),
                ..default()
            },
            columns,
        ))
        .with_children(build);
}

fn chip(parent: &mut ChildBuilder, text: &str, color: Color, background: Color) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                ..default()
            },
            BackgroundColor(background),
            BorderRadius::all(Val::Px(9999.0)),
        ))
        .with_child((Text::new(text), font(TEXT_XS), TextColor(color)));
}

fn chip_row(parent: &mut ChildBuilder, build: impl FnOnce(&mut ChildBuilder)) {
    parent
        .spawn(Node {
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(8.0),
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(build);
}

fn bullet(parent: &mut ChildBuilder, build: impl FnOnce(&mut ChildBuilder)) {
    parent
        .spawn(Node {
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|row| {
            row.spawn((Text::new(">"), font(TEXT_BASE), TextColor(EMERALD_400)));
            build(row);
        });
}

/// Visual weight of a link button
#[derive(Clone, Copy)]
pub enum ButtonKind {
    /// Filled emerald
    Primary,
    /// Emerald outline, fills on hover
    Outline,
    /// Bare text link, turns emerald on hover
    Quiet,
}

pub fn link_button(parent: &mut ChildBuilder, link: Link, kind: ButtonKind) {
    let (background, hovered, text_color, border) = match kind {
        ButtonKind::Primary => (EMERALD_400, EMERALD_300, SLATE_950, EMERALD_400),
        ButtonKind::Outline => (TRANSPARENT, with_alpha(EMERALD_400, 0.15), EMERALD_400, EMERALD_400),
        ButtonKind::Quiet => (TRANSPARENT, TRANSPARENT, SLATE_400, TRANSPARENT),
    };
    let hovered_text = match kind {
        ButtonKind::Quiet => EMERALD_400,
        _ => text_color,
    };
    let padding = match kind {
        ButtonKind::Quiet => UiRect::all(Val::Px(4.0)),
        _ => UiRect::axes(Val::Px(32.0), Val::Px(12.0)),
    };

    let mut button = parent.spawn((
        Button,
        Node {
            padding,
            border: UiRect::all(Val::Px(1.0)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
        BorderColor(border),
        BorderRadius::all(Val::Px(6.0)),
        ButtonTint {
            normal: background,
            hovered,
        },
        HoverText {
            normal: text_color,
            hovered: hovered_text,
        },
    ));
    match link.target {
        LinkTarget::External(url) => button.insert(OutboundLink(url)),
        LinkTarget::Section(section) => button.insert(SectionLink(section)),
    };
    button.with_child((Text::new(link.label), font(TEXT_BASE), TextColor(text_color)));
}

fn tone_border(tone: Tone) -> Color {
    with_alpha(tone_color(tone), 0.3)
}

fn tone_fill(tone: Tone) -> Color {
    with_alpha(tone_color(tone), 0.1)
}

// --- Sections ---

fn spawn_hero(page: &mut ChildBuilder) {
    let profile = &content::PROFILE;
    page.spawn((
        Node {
            width: Val::Percent(100.0),
            min_height: Val::Vh(100.0),
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect::axes(Val::Px(24.0), Val::Px(80.0)),
            row_gap: Val::Px(24.0),
            ..default()
        },
        SectionAnchor(SectionId::Home),
    ))
    .with_children(|hero| {
        hero.spawn((
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(tone_fill(Tone::Emerald)),
            BorderColor(tone_border(Tone::Emerald)),
            BorderRadius::all(Val::Px(9999.0)),
            RevealOnMount::new(Reveal::fade(0.0, 1.0)),
        ))
        .with_child((Text::new(profile.badge), font(TEXT_SM), TextColor(EMERALD_400)));

        hero.spawn((
            Text::new(profile.name),
            font(TEXT_7XL),
            TextColor(SLATE_100),
            Node::default(),
            RevealOnMount::new(Reveal::slide_up(0.0)),
        ));

        hero.spawn((
            Text::new(profile.tagline),
            font(TEXT_2XL),
            TextColor(EMERALD_400),
            Node::default(),
            RevealOnMount::new(Reveal::slide_up(0.2)),
        ));

        hero.spawn((
            Node {
                max_width: Val::Px(768.0),
                ..default()
            },
            RevealOnMount::new(Reveal::slide_up(0.4)),
        ))
        .with_children(|summary| {
            rich_text(summary, profile.summary, TEXT_XL, SLATE_400);
        });

        hero.spawn((
            Node {
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(16.0),
                row_gap: Val::Px(16.0),
                ..default()
            },
            RevealOnMount::new(Reveal::slide_up(0.6)),
        ))
        .with_children(|actions| {
            let mut kinds = [ButtonKind::Primary, ButtonKind::Outline].into_iter();
            for link in content::HERO_ACTIONS {
                link_button(actions, *link, kinds.next().unwrap_or(ButtonKind::Outline));
            }
        });

        hero.spawn((
            Node {
                column_gap: Val::Px(24.0),
                ..default()
            },
            RevealOnMount::new(Reveal::fade(0.6, 1.0)),
        ))
        .with_children(|socials| {
            for link in content::SOCIAL_LINKS {
                link_button(socials, *link, ButtonKind::Quiet);
            }
        });

        hero.spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(32.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            RevealOnMount::new(Reveal::fade(1.0, 1.0)),
        ))
        .with_child((Text::new("v"), font(TEXT_2XL), TextColor(SLATE_400), Node::default(), ScrollHint));
    });
}

fn spawn_metrics(page: &mut ChildBuilder, settings: &Settings) {
    section(page, None, with_alpha(SLATE_900, 0.5), CONTENT_WIDTH, |col| {
        grid(col, ResponsiveGrid::new(2, 4, 4), |cells| {
            for (index, metric) in content::METRICS.iter().enumerate() {
                cells
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|cell| {
                        cell.spawn((
                            Text::new(metric.display(0)),
                            font(TEXT_5XL),
                            TextColor(EMERALD_400),
                            CounterView {
                                metric: index,
                                counter: AnimatedCounter::new(
                                    metric.end,
                                    settings.counter_duration_ms,
                                    settings.visibility_threshold,
                                ),
                            },
                        ));
                        label(cell, metric.label, TEXT_SM, SLATE_400);
                    });
            }
        });
    });
}

fn spawn_about(page: &mut ChildBuilder) {
    section(page, Some(SectionId::About), SLATE_950, CONTENT_WIDTH, |col| {
        heading(col, &content::ABOUT_HEADING);
        grid(col, ResponsiveGrid::new(1, 2, 2), |cols| {
            cols.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|story| {
                for paragraph in content::ABOUT {
                    rich_text(story, paragraph, TEXT_BASE, SLATE_300);
                }
            });

            cols.spawn(Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(24.0),
                ..default()
            })
            .with_children(|cards| {
                for highlight in content::HIGHLIGHTS {
                    card(cards, SLATE_800, |c| {
                        label(c, highlight.title, TEXT_XL, SLATE_100);
                        label(c, highlight.body, TEXT_SM, SLATE_400);
                    });
                }
            });
        });
    });
}

fn spawn_experience(page: &mut ChildBuilder) {
    section(page, Some(SectionId::Experience), with_alpha(SLATE_900, 0.3), CONTENT_WIDTH, |col| {
        heading(col, &content::EXPERIENCE_HEADING);
        for job in content::JOBS {
            card(col, SLATE_800, |c| {
                c.spawn(Node {
                    justify_content: JustifyContent::SpaceBetween,
                    flex_wrap: FlexWrap::Wrap,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|head| {
                    head.spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(4.0),
                        ..default()
                    })
                    .with_children(|who| {
                        label(who, job.title, TEXT_2XL, SLATE_100);
                        label(who, job.company, TEXT_BASE, EMERALD_400);
                        label(who, job.blurb, TEXT_SM, SLATE_500);
                    });
                    label(head, job.period, TEXT_SM, SLATE_400);
                });

                for item in job.bullets {
                    bullet(c, |row| {
                        row.spawn((Text::default(), font(TEXT_BASE), TextColor(SLATE_300)))
                            .with_children(|text| {
                                text.spawn((
                                    TextSpan::new(item.lead),
                                    font(TEXT_BASE),
                                    TextColor(EMERALD_400),
                                ));
                                for span in item.body {
                                    let tint = match span {
                                        Span::Plain(_) => SLATE_300,
                                        Span::Accent(_) => EMERALD_400,
                                    };
                                    text.spawn((TextSpan::new(span.text()), font(TEXT_BASE), TextColor(tint)));
                                }
                            });
                    });
                }

                if let Some(award) = job.award {
                    c.spawn((
                        Node {
                            padding: UiRect::top(Val::Px(16.0)),
                            border: UiRect::top(Val::Px(1.0)),
                            ..default()
                        },
                        BorderColor(SLATE_800),
                    ))
                    .with_child((Text::new(award), font(TEXT_BASE), TextColor(AMBER_400)));
                }
            });
        }
    });
}

fn spawn_projects(page: &mut ChildBuilder) {
    section(page, Some(SectionId::Projects), SLATE_950, CONTENT_WIDTH, |col| {
        heading(col, &content::PROJECTS_HEADING);
        grid(col, ResponsiveGrid::new(1, 2, 3), |cells| {
            for project in content::PROJECTS {
                card(cells, tone_border(project.tone), |c| {
                    c.spawn(Node {
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        ..default()
                    })
                    .with_children(|head| {
                        label(head, project.title, TEXT_XL, SLATE_100);
                        link_button(
                            head,
                            Link {
                                label: "Open",
                                target: LinkTarget::External(project.url),
                            },
                            ButtonKind::Quiet,
                        );
                    });
                    label(c, project.description, TEXT_SM, SLATE_400);
                    chip_row(c, |chips| {
                        for tag in project.tags {
                            chip(chips, tag.label, tone_color(tag.tone), tone_fill(tag.tone));
                        }
                    });
                });
            }
        });

        col.spawn(Node {
            justify_content: JustifyContent::Center,
            margin: UiRect::top(Val::Px(24.0)),
            ..default()
        })
        .with_children(|row| link_button(row, content::ALL_PROJECTS, ButtonKind::Outline));
    });
}

fn spawn_skills(page: &mut ChildBuilder) {
    section(page, Some(SectionId::Skills), with_alpha(SLATE_900, 0.3), CONTENT_WIDTH, |col| {
        heading(col, &content::SKILLS_HEADING);
        grid(col, ResponsiveGrid::new(1, 2, 3), |cells| {
            for group in content::SKILLS {
                card(cells, SLATE_800, |c| {
                    label(c, group.title, TEXT_XL, SLATE_100);
                    chip_row(c, |chips| {
                        for skill in group.skills {
                            chip(chips, skill, SLATE_300, SLATE_800);
                        }
                    });
                });
            }
        });
    });
}

fn spawn_achievements(page: &mut ChildBuilder) {
    section(page, Some(SectionId::Achievements), SLATE_950, CONTENT_WIDTH, |col| {
        heading(col, &content::ACHIEVEMENTS_HEADING);
        grid(col, ResponsiveGrid::new(1, 2, 2), |cells| {
            for award in content::AWARDS {
                card(cells, tone_border(award.tone), |c| {
                    label(c, award.title, TEXT_XL, tone_color(award.tone));
                    label(c, award.detail, TEXT_BASE, SLATE_300);
                    label(c, award.note, TEXT_SM, SLATE_400);
                });
            }
        });

        card(col, SLATE_800, |c| {
            c.spawn((
                Text::new("Patents & Publications"),
                font(TEXT_2XL),
                TextColor(SLATE_100),
                Node {
                    align_self: AlignSelf::Center,
                    ..default()
                },
            ));
            grid(c, ResponsiveGrid::new(1, 2, 2), |cols| {
                for (title, items) in [
                    ("Patents Secured", content::PATENTS),
                    ("Research Publications", content::PUBLICATIONS),
                ] {
                    cols.spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|list| {
                        label(list, title, TEXT_BASE, EMERALD_400);
                        for item in items {
                            bullet(list, |row| label(row, item, TEXT_BASE, SLATE_300));
                        }
                    });
                }
            });
        });
    });
}

fn spawn_contact(page: &mut ChildBuilder) {
    let profile = &content::PROFILE;
    section(page, Some(SectionId::Contact), with_alpha(SLATE_900, 0.3), NARROW_CONTENT_WIDTH, |col| {
        heading(col, &content::CONTACT_HEADING);
        col.spawn((
            Text::new(content::CONTACT_BLURB),
            font(TEXT_LG),
            TextColor(SLATE_400),
            TextLayout::new_with_justify(JustifyText::Center),
        ));

        grid(col, ResponsiveGrid::new(1, 3, 3), |cells| {
            for contact in content::CONTACT_CARDS {
                cells
                    .spawn((
                        Button,
                        Node {
                            flex_direction: FlexDirection::Column,
                            align_items: AlignItems::Center,
                            padding: UiRect::all(Val::Px(24.0)),
                            row_gap: Val::Px(8.0),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BackgroundColor(card_background()),
                        BorderColor(SLATE_800),
                        BorderRadius::all(Val::Px(8.0)),
                        ButtonTint {
                            normal: card_background(),
                            hovered: with_alpha(SLATE_800, 0.8),
                        },
                        OutboundLink(contact.url),
                    ))
                    .with_children(|c| {
                        label(c, contact.title, TEXT_BASE, SLATE_100);
                        label(c, contact.caption, TEXT_SM, SLATE_400);
                    });
            }
        });

        col.spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            ..default()
        })
        .with_children(|info| {
            label(info, profile.location, TEXT_BASE, SLATE_500);
            label(info, profile.phone, TEXT_BASE, SLATE_500);
        });
    });
}

fn spawn_footer(page: &mut ChildBuilder) {
    page.spawn((
        Node {
            width: Val::Percent(100.0),
            flex_shrink: 0.0,
            justify_content: JustifyContent::Center,
            padding: UiRect::vertical(Val::Px(32.0)),
            border: UiRect::top(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(with_alpha(SLATE_900, 0.5)),
        BorderColor(SLATE_800),
    ))
    .with_child((Text::new(content::PROFILE.footer), font(TEXT_SM), TextColor(SLATE_400)));
}
