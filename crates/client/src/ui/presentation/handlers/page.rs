//! Page-level setup

use crate::config::PAGE_TITLE;
use crate::ports::outbound::PlatformPort;

pub fn init_page(platform: &dyn PlatformPort) {
    platform.set_page_title(PAGE_TITLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;

    #[test]
    fn sets_page_title() {
        let (platform, handles) = create_mock_platform();
        init_page(&platform);
        assert_eq!(handles.document.title().as_deref(), Some(PAGE_TITLE));
    }
}
