//! Structural CSS for the slider.
//!
//! Only layout lives here: stacking, clipping, the handle and the
//! placeholders. Colours come from two custom properties a page can set:
//!
//! - `--bas-accent` - handle and focus ring (default white)
//! - `--bas-radius` - corner radius (default 1rem)
//!
//! ```rust
//! use before_after_slider::styles::SLIDER_CSS;
//!
//! let page_css = format!("{SLIDER_CSS}\n.bas {{ --bas-accent: #f5c542; }}");
//! assert!(page_css.contains(".bas-handle"));
//! ```

/// Stylesheet for `BeforeAfterSlider`; inject once per page.
pub const SLIDER_CSS: &str = r#"
.bas {
    position: relative;
    width: 100%;
    aspect-ratio: 4 / 3;
    overflow: hidden;
    border-radius: var(--bas-radius, 1rem);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    user-select: none;
    -webkit-user-select: none;
    touch-action: pan-y;
    cursor: ew-resize;
    background: #1f2937;
}

.bas-dragging {
    cursor: grabbing;
}

.bas-layer {
    position: absolute;
    inset: 0;
    overflow: hidden;
}

.bas-image {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    pointer-events: none;
}

.bas-handle {
    position: absolute;
    top: 0;
    bottom: 0;
    width: 2.5rem;
    transform: translateX(-50%);
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: ew-resize;
    outline: none;
    touch-action: none;
}

.bas-handle-line {
    position: absolute;
    top: 0;
    bottom: 0;
    left: 50%;
    width: 4px;
    transform: translateX(-50%);
    background: var(--bas-accent, #ffffff);
}

.bas-handle-grip {
    position: relative;
    width: 2rem;
    height: 2rem;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--bas-accent, #ffffff);
    color: #4b5563;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
}

.bas-handle:focus-visible .bas-handle-grip {
    box-shadow: 0 0 0 3px rgba(0, 0, 0, 0.6), 0 0 0 6px var(--bas-accent, #ffffff);
}

.bas-label {
    position: absolute;
    top: 0.5rem;
    padding: 0.25rem 0.5rem;
    border-radius: 0.25rem;
    background: rgba(0, 0, 0, 0.5);
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    pointer-events: none;
    transition: opacity 200ms ease-out;
}

.bas-label-after {
    left: 0.5rem;
}

.bas-label-before {
    right: 0.5rem;
}

.bas-label-hidden {
    opacity: 0;
}

.bas-split {
    position: absolute;
    inset: 0;
    display: grid;
    grid-template-columns: 1fr 1fr;
    cursor: default;
}

.bas-region {
    position: relative;
    overflow: hidden;
}

.bas-placeholder {
    position: absolute;
    inset: 0;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    background: #e5e7eb;
    color: #6b7280;
    font-size: 0.875rem;
    text-align: center;
    padding: 1rem;
}

@media (prefers-reduced-motion: reduce) {
    .bas-label {
        transition: none;
    }
}
"#;
