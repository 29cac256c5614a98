/// Page numbers advertised by a `Link` response header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<u32>,
    pub last: Option<u32>,
}

/// Parse the `next` and `last` page numbers out of an RFC 8288 `Link`
/// header such as
/// `<https://api.github.com/notifications?page=2>; rel="next", <...?page=5>; rel="last"`.
///
/// Links without a `page` query parameter are ignored.
pub fn parse_link_header(value: &str) -> PageLinks {
    let mut links = PageLinks::default();

    for link in value.split(',') {
        let mut segments = link.split(';');
        let Some(target) = segments.next() else {
            continue;
        };
        let target = target.trim();
        let Some(url) = target.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
            continue;
        };
        let Some(page) = page_param(url) else {
            continue;
        };

        for param in segments {
            let Some((key, rel)) = param.trim().split_once('=') else {
                continue;
            };
            if key.trim() != "rel" {
                continue;
            }
            // rel may hold several space-separated relation types
            for rel in rel.trim().trim_matches('"').split_whitespace() {
                match rel {
                    "next" => links.next = Some(page),
                    "last" => links.last = Some(page),
                    _ => {},
                }
            }
        }
    }

    links
}

fn page_param(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
