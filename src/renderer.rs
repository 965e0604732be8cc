use crate::entities::{Circle as _, Enemy, GameState, Particle, Projectile, Rgb, Velocity};
use crate::game::Game;
use crate::tuning::{ENEMY_SPEED, PROJECTILE_SPEED};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Circle, Context, Points},
    },
};

/// Every frame the arena is dimmed to this fraction of its previous brightness.
const TRAIL_RETENTION: f64 = 0.95;
/// Ghost copies drawn behind each moving entity
const TRAIL_SAMPLES: u32 = 5;
/// Frames between two ghost copies
const TRAIL_SPACING: u32 = 4;

/// Maps terminal cells to arena units and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Viewport {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Arena size covered by a terminal of `columns` x `rows`.
    pub fn arena_size(&self, columns: u16, rows: u16) -> (f64, f64) {
        (
            columns as f64 * self.cell_width,
            rows as f64 * self.cell_height,
        )
    }

    /// Arena point at the centre of a terminal cell.
    pub fn cell_to_arena(&self, column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }

    /// Distance between neighbouring braille dots, the finest step worth drawing.
    fn dot_pitch(&self) -> f64 {
        (self.cell_width / 2.0).min(self.cell_height / 4.0)
    }
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game: &'a Game,
    pub fps: u32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    viewport: Viewport,
}

impl GameRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Main render method that dispatches to state-specific overlays
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_arena(frame, view);
        self.render_hud(frame, view);

        match view.game.state() {
            GameState::Playing => {}
            GameState::Ready => self.render_title(frame, view),
            GameState::Paused => self.render_paused(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    fn render_arena(&self, frame: &mut Frame, view: &RenderView) {
        let game = view.game;
        let height = game.height();
        let pitch = self.viewport.dot_pitch();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(Color::Black)
            .x_bounds([0.0, game.width()])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                // Motion trails stand in for the translucent fade of older frames
                for projectile in game.projectiles() {
                    draw_trail(
                        ctx,
                        height,
                        projectile,
                        projectile.velocity,
                        PROJECTILE_SPEED,
                        projectile.color,
                    );
                }
                for enemy in game.enemies() {
                    draw_trail(ctx, height, enemy, enemy.velocity, ENEMY_SPEED, enemy.color);
                }
                ctx.layer();

                for particle in game.particles() {
                    draw_particle(ctx, height, pitch, particle);
                }
                ctx.layer();

                for enemy in game.enemies() {
                    draw_enemy(ctx, height, pitch, enemy);
                }
                for projectile in game.projectiles() {
                    draw_projectile(ctx, height, pitch, projectile);
                }

                let player = game.player();
                fill_circle(ctx, height, pitch, player.x, player.y, player.radius, player.color);
            });

        frame.render_widget(canvas, view.area);
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let score = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.game.score()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let fps = Line::from(vec![
            Span::styled("FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", view.fps), Style::default().fg(Color::White)),
        ]);

        let fps_width = area.width.min(10);
        let score_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(fps_width + 2),
            height: area.height.min(1),
        };
        let fps_area = Rect {
            x: area.x + area.width - fps_width,
            y: area.y,
            width: fps_width,
            height: area.height.min(1),
        };

        frame.render_widget(Paragraph::new(score), score_area);
        frame.render_widget(Paragraph::new(fps), fps_area);

        if view.game.state() == GameState::Playing {
            let controls = Line::from(Span::styled(
                "[Click: Fire] [P: Pause] [Q: Quit]",
                Style::default().fg(Color::DarkGray),
            ));
            let controls_area = Rect {
                x: area.x + 1,
                y: area.y + area.height.saturating_sub(1),
                width: area.width.saturating_sub(2),
                height: area.height.min(1),
            };
            frame.render_widget(Paragraph::new(controls).centered(), controls_area);
        }
    }

    fn render_title(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("PARTICLE SHOOTER").centered().bold().white(),
            Line::from(""),
            Line::from("Click anywhere to fire from the centre").centered().gray(),
            Line::from("Don't let the orbs touch you").centered().gray(),
            Line::from(""),
            Line::from(format!("[Enter] {}", view.game.start_label()))
                .centered()
                .bold()
                .cyan(),
        ];

        render_modal(frame, view.area, text, 44, 9, Color::White);
    }

    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        render_modal(frame, view.area, text, 30, 6, Color::Yellow);
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from(""),
            Line::from(format!("{}", view.game.score()))
                .centered()
                .bold()
                .white(),
            Line::from("Points").centered().gray(),
            Line::from(""),
            Line::from(format!("[Enter] {}", view.game.start_label()))
                .centered()
                .bold()
                .cyan(),
            Line::from("[Q] Quit").centered().white(),
        ];

        render_modal(frame, view.area, text, 30, 8, Color::Red);
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn render_modal(
    frame: &mut Frame,
    area: Rect,
    text: Vec<Line<'_>>,
    width: u16,
    height: u16,
    border: Color,
) {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let modal_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .alignment(Alignment::Center),
        modal_area,
    );
}

/// Draws a solid disc as concentric rings one dot apart. Arena y grows downward.
fn fill_circle(ctx: &mut Context, height: f64, pitch: f64, x: f64, y: f64, radius: f64, rgb: Rgb) {
    let color = to_color(rgb);
    let y = height - y;

    let mut ring = radius;
    while ring > pitch / 2.0 {
        ctx.draw(&Circle {
            x,
            y,
            radius: ring,
            color,
        });
        ring -= pitch;
    }
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}

fn draw_trail(
    ctx: &mut Context,
    height: f64,
    body: &impl crate::entities::Circle,
    velocity: Velocity,
    speed: f64,
    rgb: Rgb,
) {
    // Oldest ghost first so brighter ones land on top
    for sample in (1..=TRAIL_SAMPLES).rev() {
        let frames = sample * TRAIL_SPACING;
        let back = velocity.scaled(speed * frames as f64);
        let alpha = TRAIL_RETENTION.powi(frames as i32);
        ctx.draw(&Circle {
            x: body.x() - back.x,
            y: height - (body.y() - back.y),
            radius: body.radius(),
            color: to_color(rgb.fade(alpha)),
        });
    }
}

fn draw_particle(ctx: &mut Context, height: f64, pitch: f64, particle: &Particle) {
    let rgb = particle.color.fade(particle.opacity);
    if particle.radius < pitch {
        ctx.draw(&Points {
            coords: &[(particle.x, height - particle.y)],
            color: to_color(rgb),
        });
    } else {
        fill_circle(ctx, height, pitch, particle.x, particle.y, particle.radius, rgb);
    }
}

fn draw_enemy(ctx: &mut Context, height: f64, pitch: f64, enemy: &Enemy) {
    fill_circle(ctx, height, pitch, enemy.x, enemy.y, enemy.radius, enemy.color);
}

fn draw_projectile(ctx: &mut Context, height: f64, pitch: f64, projectile: &Projectile) {
    fill_circle(
        ctx,
        height,
        pitch,
        projectile.x,
        projectile.y,
        projectile.radius,
        projectile.color,
    );
}
