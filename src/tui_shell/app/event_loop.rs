use super::*;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub(super) fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_loader();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match app.focus {
        Focus::List => handle_list_key(app, key),
        Focus::AddForm | Focus::EditForm => super::form_keys::handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }

        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Home => app.cursor = 0,
        KeyCode::End => app.cursor = app.store.books().len().saturating_sub(1),

        KeyCode::Char('a') => app.toggle_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_highlighted(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_highlighted(),

        _ => {}
    }
}
