// SPDX-License-Identifier: GPL-3.0-only

//! Screen rendering
//!
//! The main screen is a single centered column: the result headline, the
//! captured image (click to scan it again), and the Open Camera button.
//! The settings drawer carries the capture device selection.

use crate::app::state::{AppModel, ContextPage, Message};
use crate::constants::{app_info, ui};
use crate::fl;
use cosmic::Element;
use cosmic::app::context_drawer;
use cosmic::iced::{Alignment, Length, alignment};
use cosmic::widget;

impl AppModel {
    /// Build the main application view
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let mut column = widget::column()
            .push(widget::text(self.result_text.as_str()).size(ui::RESULT_TEXT_SIZE))
            .spacing(spacing.space_s)
            .align_x(Alignment::Center);

        // Captured image, clickable to re-scan the same frame without
        // re-invoking the camera
        if let Some(handle) = &self.captured_handle {
            column = column.push(
                widget::mouse_area(
                    cosmic::iced::widget::image(handle.clone())
                        .width(Length::Fixed(ui::CAPTURE_PREVIEW_SIZE))
                        .height(Length::Fixed(ui::CAPTURE_PREVIEW_SIZE)),
                )
                .on_press(Message::RescanCapture),
            );
            column = column.push(widget::text(fl!("rescan-hint")).size(ui::HINT_TEXT_SIZE));
        }

        column = column
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::button::standard(fl!("open-camera")).on_press(Message::OpenCamera));

        widget::container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(ui::SCREEN_PADDING)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    /// Create the settings view for the context drawer
    pub fn settings_view(&self) -> context_drawer::ContextDrawer<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Camera selection dropdown
        let camera_section: Element<'_, Message> = if self.camera_dropdown_options.is_empty() {
            widget::text(fl!("no-cameras")).into()
        } else {
            widget::dropdown(
                &self.camera_dropdown_options,
                Some(self.current_camera_index),
                Message::SelectCamera,
            )
            .into()
        };

        // Version info string
        let version_info = if app_info::is_flatpak() {
            format!("Version {} (Flatpak)", app_info::version())
        } else {
            format!("Version {}", app_info::version())
        };

        let settings_column: Element<'_, Message> = widget::column()
            .push(
                widget::text(fl!("camera"))
                    .size(16)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(camera_section)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::text(version_info).size(12))
            .into();

        context_drawer::context_drawer(
            settings_column,
            Message::ToggleContextPage(ContextPage::Settings),
        )
        .title(fl!("settings"))
    }
}
