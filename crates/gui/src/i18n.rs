use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.clear_all" => if ru { "Очистить всё  Del" } else { "Clear all  Del" },
        "menu.cancel" => if ru { "Отменить отрезок  Esc" } else { "Cancel segment  Esc" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Toolbar ─────────────────────────────────────────
        "tb.collapse" => if ru { "Свернуть" } else { "Collapse" },
        "tb.clear_all" => if ru { "Очистить" } else { "Clear all" },

        "tip.collapse" => if ru { "Стянуть все отрезки к их серединам (C)" } else { "Shrink every segment to its midpoint (C)" },
        "tip.clear_all" => if ru { "Удалить все отрезки (Del)" } else { "Remove all segments (Del)" },

        // ── Status bar ──────────────────────────────────────
        "status.segments" => if ru { "Отрезков" } else { "Segments" },
        "status.intersections" => if ru { "Пересечений" } else { "Intersections" },
        "status.collapsing" => if ru { "Сворачивание, кадр" } else { "Collapsing, frame" },

        "hint.line_start" => if ru { "ЛКМ: начало отрезка" } else { "Click: segment start" },
        "hint.line_end" => if ru { "ЛКМ: конец отрезка | ПКМ/Esc: отмена" } else { "Click: segment end | RMB/Esc: cancel" },
        "hint.wait" => if ru { "Ввод недоступен до конца анимации" } else { "Input disabled until the animation ends" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.collapse" => if ru { "Сворачивание" } else { "Collapse" },
        "settings.line_step" => if ru { "Шаг за кадр:" } else { "Step per frame:" },
        "settings.convergence" => if ru { "Условие завершения:" } else { "Completion rule:" },
        "settings.conv_directional" => if ru { "По направлению" } else { "Directional" },
        "settings.conv_axis" => if ru { "По осям" } else { "Per-axis" },
        "settings.markers" => if ru { "Маркеры пересечений" } else { "Intersection markers" },
        "settings.marker_radius" => if ru { "Радиус:" } else { "Radius:" },
        "settings.marker_color" => if ru { "Цвет:" } else { "Color:" },
        "settings.snap_to_pixel" => if ru { "Округлять до пикселя" } else { "Snap to pixel" },
        "settings.canvas" => if ru { "Холст" } else { "Canvas" },
        "settings.bg_color" => if ru { "Цвет фона:" } else { "Background:" },
        "settings.line_color" => if ru { "Цвет линий:" } else { "Line color:" },
        "settings.line_width" => if ru { "Толщина линий:" } else { "Line width:" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта:" } else { "Font size:" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset to defaults" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        _ => "???",
    }
}
