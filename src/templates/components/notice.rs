use crate::app::{Notice, NoticeKind};
use maud::{html, Markup};

pub fn notice_banner(notice: &Notice) -> Markup {
    let class = match notice.kind {
        NoticeKind::Success => "message success",
        NoticeKind::Error => "message error",
    };

    html! {
        div class=(class) role="status" data-autodismiss="5000" {
            span { (notice.message) }
            button type="button" class="dismiss" aria-label="Dismiss"
                onclick="this.parentElement.remove()" { "×" }
        }
    }
}
