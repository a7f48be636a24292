//! HTML rendering for the task list page.
//!
//! The markup is small enough to build as a plain string; rendering is a
//! pure function of the task list and the deployment metadata.

use todo_store::Task;

use crate::config::Deployment;

/// Renders the full task list page.
pub fn home_page(tasks: &[Task], deployment: &Deployment) -> String {
    let mut rows = String::new();
    for task in tasks {
        rows.push_str(&task_row(task));
    }
    if tasks.is_empty() {
        rows.push_str("      <li class=\"empty\">Nothing to do</li>\n");
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>Todo App</title>\n\
         </head>\n\
         <body>\n\
           <h1>{region} Todo List</h1>\n\
           <form action=\"/add\" method=\"post\">\n\
             <input type=\"text\" name=\"title\" placeholder=\"Enter a task\">\n\
             <button type=\"submit\">Add</button>\n\
           </form>\n\
           <ul>\n\
         {rows}\
           </ul>\n\
           <footer>Hosted By: {provider}</footer>\n\
         </body>\n\
         </html>\n",
        region = escape(&deployment.region),
        rows = rows,
        provider = escape(&deployment.provider),
    )
}

/// Renders one task entry with its toggle and delete links.
fn task_row(task: &Task) -> String {
    let state = if task.complete {
        "Completed"
    } else {
        "Not completed"
    };

    format!(
        "      <li>\
         <span class=\"title\">{title}</span> \
         <span class=\"state\">{state}</span> \
         <a href=\"/update/{id}\">Toggle</a> \
         <a href=\"/delete/{id}\">Delete</a>\
         </li>\n",
        title = escape(&task.title),
        state = state,
        id = task.id,
    )
}

/// Escapes text for embedding in HTML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment() -> Deployment {
        Deployment {
            provider: "test-host".to_string(),
            region: "eu-west-1".to_string(),
        }
    }

    fn task(id: i64, title: &str, complete: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            complete,
        }
    }

    #[test]
    fn test_page_carries_region_and_provider() {
        let page = home_page(&[], &deployment());

        assert!(page.contains("eu-west-1 Todo List"));
        assert!(page.contains("Hosted By: test-host"));
        assert!(page.contains("Nothing to do"));
    }

    #[test]
    fn test_row_links_use_task_id() {
        let page = home_page(&[task(3, "buy milk", false)], &deployment());

        assert!(page.contains("buy milk"));
        assert!(page.contains("href=\"/update/3\""));
        assert!(page.contains("href=\"/delete/3\""));
    }

    #[test]
    fn test_completion_state_labels() {
        let open = home_page(&[task(1, "a", false)], &deployment());
        assert!(open.contains("Not completed"));

        let done = home_page(&[task(1, "a", true)], &deployment());
        assert!(done.contains("Completed"));
        assert!(!done.contains("Not completed"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let page = home_page(&[task(1, "<script>alert('x')</script>", false)], &deployment());

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_escape_covers_all_entities() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<\">'"), "&lt;&quot;&gt;&#39;");
        assert_eq!(escape("plain"), "plain");
    }
}
