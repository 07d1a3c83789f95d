//! Global CSS styles for Starfolio.
//!
//! Translucent cards floating over a full-window starfield. Dark is the
//! default palette; `.app-root.light` swaps the custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.app-root.dark {
  --background: #020308;
  --surface: rgba(9, 9, 11, 0.6);
  --surface-hover: rgba(9, 9, 11, 0.8);
  --border: #27272a;

  --primary: #fafafa;
  --primary-tint: rgba(250, 250, 250, 0.2);
  --secondary: #27272a;
  --secondary-text: #fafafa;

  --text-primary: #fafafa;
  --text-muted: #a1a1aa;

  --overlay: rgba(0, 0, 0, 0.8);
}

.app-root.light {
  --background: #f4f4f5;
  --surface: rgba(255, 255, 255, 0.7);
  --surface-hover: rgba(255, 255, 255, 0.9);
  --border: #e4e4e7;

  --primary: #18181b;
  --primary-tint: rgba(24, 24, 27, 0.12);
  --secondary: #f4f4f5;
  --secondary-text: #18181b;

  --text-primary: #09090b;
  --text-muted: #71717a;

  --overlay: rgba(0, 0, 0, 0.5);
}

:root {
  --font-sans: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', monospace;

  --radius: 0.5rem;
  --radius-lg: 0.75rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  --brand-github: #374151;
  --brand-github-hover: #1f2937;
  --brand-twitter: #60a5fa;
  --brand-twitter-hover: #3b82f6;
  --brand-email: #ef4444;
  --brand-email-hover: #dc2626;
  --brand-discord: #5865f2;
  --brand-discord-hover: #4752c4;
}

/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Layout === */
.app-root {
  position: relative;
  min-height: 100vh;
  height: 100vh;
  overflow-y: auto;
  background: var(--background);
  color: var(--text-primary);
}

.page {
  position: relative;
  z-index: 1;
  min-height: 100vh;
  padding: 3rem 1rem;
}

.page-home {
  display: flex;
  align-items: center;
  justify-content: center;
}

.page-content {
  width: 100%;
  max-width: 72rem;
  margin: 0 auto;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 2rem;
}

.back-link {
  display: inline-flex;
  margin-top: 2rem;
}

/* === Starfield === */
.starfield {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  width: 100%;
  height: 100%;
}

.starfield.faded {
  filter: blur(0.4px);
}

.starfield svg {
  display: block;
  width: 100%;
  height: 100%;
}

/* === Card === */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  backdrop-filter: blur(8px);
  -webkit-backdrop-filter: blur(8px);
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.card:hover {
  background: var(--surface-hover);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4);
}

.card-header {
  display: flex;
  flex-direction: column;
  gap: 0.375rem;
  padding: 1.5rem 1.5rem 0;
}

.card-title {
  font-size: 1.5rem;
  font-weight: 600;
  line-height: 1.2;
}

.card-description {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.card-content {
  padding: 1.5rem;
}

.card-footer {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0 1.5rem 1.5rem;
}

/* === Profile Card === */
.profile-card {
  width: 100%;
  max-width: 42rem;
}

.profile-card {
  position: relative;
}

.profile-header {
  flex-direction: row;
  align-items: center;
  gap: 1rem;
}

.source-corner {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  z-index: 10;
}

.source-link {
  font-size: 0.75rem;
  height: 1.75rem;
  background: var(--secondary);
  color: var(--secondary-text);
}

.profile-sections {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5rem;
}

.profile-section ul {
  list-style: none;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.profile-section li + li {
  margin-top: 0.5rem;
}

.profile-name {
  font-size: 1.875rem;
  font-weight: 700;
}

.profile-tagline {
  min-height: 1.75rem;
  font-family: var(--font-mono);
  font-size: 1.125rem;
  color: var(--text-muted);
}

.profile-section {
  margin-bottom: 1.25rem;
}

.profile-section h4 {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.profile-section p {
  font-size: 0.9375rem;
  line-height: 1.6;
  color: var(--text-muted);
}

.profile-footer {
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
}

.social-row {
  display: flex;
  gap: 0.5rem;
}

.profile-actions {
  display: flex;
  gap: 0.5rem;
}

/* === Typewriter === */
.typewriter {
  white-space: pre;
}

.typewriter-caret {
  display: inline-block;
  margin-left: 1px;
  animation-name: caret-blink;
  animation-iteration-count: infinite;
  animation-direction: alternate;
  animation-timing-function: ease-in-out;
}

@keyframes caret-blink {
  from { opacity: 1; }
  to { opacity: 0; }
}

/* === Entrance Motion === */
.enter-fade {
  opacity: 0;
  animation: enter-fade var(--transition-normal) forwards;
}

.enter-rise {
  opacity: 0;
  transform: translateY(20px);
  animation-name: enter-rise;
  animation-fill-mode: forwards;
  animation-timing-function: ease-out;
}

.enter-pop {
  opacity: 0;
  transform: scale(0.95);
  animation: enter-pop 200ms ease-out forwards;
}

@keyframes enter-fade {
  to { opacity: 1; }
}

@keyframes enter-rise {
  to { opacity: 1; transform: translateY(0); }
}

@keyframes enter-pop {
  to { opacity: 1; transform: scale(1); }
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font-family: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: transform var(--transition-fast), background var(--transition-fast), color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-md {
  height: 2.5rem;
  padding: 0 1rem;
}

.btn-sm {
  height: 2.25rem;
  padding: 0 0.75rem;
}

.btn-icon {
  width: 2.5rem;
  height: 2.5rem;
  padding: 0;
}

.btn-primary {
  background: var(--primary-tint);
  color: var(--primary);
}

.btn-primary:hover {
  background: var(--primary);
  color: var(--background);
}

.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-outline:hover {
  background: var(--secondary);
}

.btn-ghost {
  background: transparent;
  color: var(--text-primary);
}

.btn-ghost:hover {
  background: var(--secondary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: var(--radius);
  background: transparent;
  color: var(--text-muted);
  font-size: 1.25rem;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--text-primary);
  background: var(--secondary);
}

/* Social buttons: brand background, white glyph, playful hover */
.social-btn {
  color: #ffffff;
  border: none;
}

.social-btn:hover {
  transform: scale(1.1) rotate(5deg);
}

.social-btn:active {
  transform: scale(0.9);
}

.social-github { background: var(--brand-github); }
.social-github:hover { background: var(--brand-github-hover); }
.social-twitter { background: var(--brand-twitter); }
.social-twitter:hover { background: var(--brand-twitter-hover); }
.social-email { background: var(--brand-email); }
.social-email:hover { background: var(--brand-email-hover); }
.social-discord { background: var(--brand-discord); }
.social-discord:hover { background: var(--brand-discord-hover); }

.social-glyph {
  font-size: 1.125rem;
  line-height: 1;
}

/* === Badges === */
.badge-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.25rem 0.625rem;
  border-radius: 9999px;
  border: 1px solid transparent;
  font-size: 0.75rem;
  font-weight: 600;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.badge-secondary {
  background: var(--secondary);
  color: var(--secondary-text);
}

.badge-outline {
  border-color: var(--border);
  color: var(--text-primary);
}

a.badge:hover {
  transform: scale(1.05);
}

.tech-glyph {
  font-family: var(--font-mono);
  font-size: 0.75rem;
}

.tech-react { color: #61dafb; }
.tech-nextjs { color: var(--text-primary); }
.tech-fastify { color: var(--text-primary); }
.tech-mongodb { color: #47a248; }
.tech-tailwind { color: #38bdf8; }
.tech-typescript { color: #3178c6; }
.tech-nodejs { color: #68a063; }
.tech-graphql { color: #e10098; }

/* === Tooltip === */
.tooltip {
  position: relative;
  display: inline-flex;
}

.tooltip-content {
  position: absolute;
  z-index: 50;
  padding: 0.375rem 0.75rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--background);
  color: var(--text-primary);
  font-size: 0.75rem;
  white-space: nowrap;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast);
}

.tooltip:hover .tooltip-content,
.tooltip:focus-within .tooltip-content {
  opacity: 1;
}

.tooltip-top { bottom: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.tooltip-bottom { top: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.tooltip-left { right: calc(100% + 6px); top: 50%; transform: translateY(-50%); }
.tooltip-right { left: calc(100% + 6px); top: 50%; transform: translateY(-50%); }

/* === Avatar === */
.avatar {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  overflow: hidden;
  background: var(--secondary);
  flex-shrink: 0;
}

.avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.avatar-fallback {
  font-weight: 600;
  color: var(--text-muted);
}

/* === Separator === */
.separator {
  height: 1px;
  width: 100%;
  border: none;
  background: var(--border);
  margin: 1rem 0;
}

/* === Projects Grid === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.project-card .card-content {
  flex: 1;
}

.project-card .card-footer {
  justify-content: space-between;
}

/* === Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: var(--overlay);
  animation: enter-fade 150ms ease-out forwards;
}

.dialog {
  width: 100%;
  max-width: 40rem;
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  background: var(--background);
  color: var(--text-primary);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  outline: none;
  opacity: 0;
  transform: scale(0.95);
  animation: enter-pop 200ms ease-out forwards;
}

.dialog-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  padding: 1.5rem 1.5rem 0.75rem;
}

.dialog-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.dialog-description {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.dialog-body {
  padding: 0 1.5rem 1.5rem;
}

/* === Scroll Area === */
.scroll-area {
  overflow-y: auto;
  padding-right: 0.75rem;
}

.scroll-area::-webkit-scrollbar {
  width: 6px;
}

.scroll-area::-webkit-scrollbar-thumb {
  background: var(--border);
  border-radius: 3px;
}

/* === Markdown prose === */
.prose {
  font-size: 0.9375rem;
  line-height: 1.7;
  color: var(--text-primary);
}

.prose h2, .prose h3 {
  font-weight: 600;
  margin: 1.25rem 0 0.5rem;
}

.prose h2 { font-size: 1.25rem; }
.prose h3 { font-size: 1.0625rem; }

.prose p {
  margin-bottom: 0.75rem;
}

.prose ul, .prose ol {
  padding-left: 1.5rem;
  margin-bottom: 0.75rem;
}

.prose li {
  margin-bottom: 0.25rem;
}

.prose code {
  font-family: var(--font-mono);
  font-size: 0.85em;
  padding: 0.1rem 0.3rem;
  border-radius: 4px;
  background: var(--secondary);
}

.prose a {
  text-decoration: underline;
}

/* === Responsive === */
@media (max-width: 640px) {
  .page { padding: 1.5rem 0.75rem; }
  .profile-footer { flex-direction: column; align-items: stretch; }
  .profile-sections { grid-template-columns: 1fr; }
  .profile-actions { justify-content: center; }
  .social-row { justify-content: center; }
}
"#;
