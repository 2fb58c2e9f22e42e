//! HTML template constants for the `HtmlFormatter`.
//!
//! CSS and the inline script live here, apart from the formatting logic.

/// Document start up to the opening `<title>` tag.
pub const HTML_HEAD_OPEN: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

/// Stylesheet through the opening of the page container.
pub const HTML_STYLE: &str = r#"    <style>
        :root {
            --color-primary: #2563eb;
            --color-accent: #dc2626;
            --color-series-1: #2563eb;
            --color-series-2: #dc2626;
            --color-series-3: #16a34a;
            --color-series-4: #d97706;
            --color-series-5: #7c3aed;
            --color-series-6: #0891b2;
            --color-series-7: #db2777;
            --color-series-8: #65a30d;
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-warning: #eab308;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; color: var(--color-text); }
        h2 { font-size: 1.25rem; font-weight: 600; margin: 1.5rem 0 1rem; color: var(--color-text); }
        .summary-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; margin-bottom: 2rem; }
        .summary-card { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); text-align: center; }
        .summary-card .value { font-size: 2rem; font-weight: 700; display: block; color: var(--color-primary); }
        .summary-card .label { font-size: 0.875rem; color: var(--color-text-muted); margin-top: 0.25rem; }
        .narrative { margin-bottom: 1rem; max-width: 70ch; }
        .notes { background: #fef9c3; border: 1px solid var(--color-warning); border-radius: 0.5rem; padding: 1rem 1.25rem; margin-bottom: 2rem; }
        .notes h2 { margin-top: 0; font-size: 1rem; }
        .notes ul { margin-left: 1.25rem; font-size: 0.875rem; }
        .table-container { overflow-x: auto; margin-top: 1rem; }
        table { width: 100%; border-collapse: collapse; background: var(--color-card); border-radius: 0.5rem; overflow: hidden; border: 1px solid var(--color-border); }
        th, td { padding: 0.5rem 1rem; text-align: left; border-bottom: 1px solid var(--color-border); }
        th { background: var(--color-bg); font-weight: 600; font-size: 0.8125rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        th.sortable { cursor: pointer; user-select: none; }
        th.sortable:hover { background: #e2e8f0; }
        th.sortable::after { content: ''; display: inline-block; width: 0; height: 0; margin-left: 0.5rem; vertical-align: middle; opacity: 0.3; }
        th.sortable.asc::after { border-left: 4px solid transparent; border-right: 4px solid transparent; border-bottom: 6px solid currentColor; opacity: 1; }
        th.sortable.desc::after { border-left: 4px solid transparent; border-right: 4px solid transparent; border-top: 6px solid currentColor; opacity: 1; }
        td { font-size: 0.875rem; }
        td.number { text-align: right; font-variant-numeric: tabular-nums; }
        tr:last-child td { border-bottom: none; }
        tbody tr:hover { background: var(--color-bg); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        .chart-section { background: var(--color-card); border-radius: 0.5rem; padding: 1.25rem; border: 1px solid var(--color-border); margin-bottom: 1.5rem; }
        .chart-section h2 { margin-top: 0; }
        .chart-section svg { width: 100%; height: auto; max-width: 760px; display: block; }
        .chart-section svg rect { transition: opacity 0.15s ease; }
        .chart-section svg rect:hover { opacity: 0.85; }
        .chart-section svg circle:hover { stroke-width: 3; }
        .pie-toggle { margin-top: 0.5rem; padding: 0.375rem 1rem; border: 1px solid var(--color-border); background: var(--color-card); border-radius: 0.375rem; cursor: pointer; font-size: 0.875rem; }
        .pie-toggle:hover { background: var(--color-bg); }
        .pie-toggle[aria-pressed="true"] { background: var(--color-text); color: var(--color-card); border-color: var(--color-text); }
        @media print {
            body { background: white; color: black; padding: 1rem; }
            .summary-card, .chart-section, table { border: 1px solid #333; }
            .pie-toggle { display: none; }
        }
    </style>
</head>
<body>
    <div class="container">
"#;

/// Document footer with the table sorter and donut player.
pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>indicator-report</strong>
        </div>
    </div>
    <script>
        (function() {
            // Sortable tables
            document.querySelectorAll('th.sortable').forEach(header => {
                header.addEventListener('click', () => {
                    const table = header.closest('table');
                    const tbody = table.querySelector('tbody');
                    const rows = Array.from(tbody.querySelectorAll('tr'));
                    const colIndex = Array.from(header.parentNode.children).indexOf(header);
                    const isAsc = header.classList.contains('asc');

                    table.querySelectorAll('th.sortable').forEach(th => {
                        th.classList.remove('asc', 'desc');
                    });
                    header.classList.add(isAsc ? 'desc' : 'asc');

                    const numeric = header.dataset.sort === 'number';
                    rows.sort((a, b) => {
                        let aVal, bVal;
                        if (numeric) {
                            aVal = parseFloat(a.children[colIndex].dataset.value);
                            bVal = parseFloat(b.children[colIndex].dataset.value);
                            if (Number.isNaN(aVal)) aVal = -Infinity;
                            if (Number.isNaN(bVal)) bVal = -Infinity;
                        } else {
                            aVal = a.children[colIndex].textContent.trim().toLowerCase();
                            bVal = b.children[colIndex].textContent.trim().toLowerCase();
                        }
                        if (aVal < bVal) return isAsc ? 1 : -1;
                        if (aVal > bVal) return isAsc ? -1 : 1;
                        return 0;
                    });

                    rows.forEach(row => tbody.appendChild(row));
                });
            });

            // Rotating donut: cycle the precomputed frames
            document.querySelectorAll('.pie-player').forEach(player => {
                const frames = Array.from(player.querySelectorAll('g.pie-frame'));
                const button = player.querySelector('.pie-toggle');
                if (!button) return;
                if (frames.length < 2) {
                    button.disabled = true;
                    return;
                }
                let current = 0;
                let timer = null;
                const show = index => frames.forEach((frame, i) => {
                    frame.style.display = i === index ? '' : 'none';
                });
                button.addEventListener('click', () => {
                    if (timer) {
                        clearInterval(timer);
                        timer = null;
                        button.textContent = 'Play';
                        button.setAttribute('aria-pressed', 'false');
                    } else {
                        timer = setInterval(() => {
                            current = (current + 1) % frames.length;
                            show(current);
                        }, 150);
                        button.textContent = 'Pause';
                        button.setAttribute('aria-pressed', 'true');
                    }
                });
            });
        })();
    </script>
</body>
</html>
"#;
